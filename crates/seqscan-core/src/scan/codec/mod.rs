//! Cursor token transport.
//!
//! This module owns the opaque text-token format used for pagination
//! cursors. It intentionally contains only token encoding/decoding logic and
//! no pagination semantics; the wire payload itself lives in
//! `crate::scan::cursor`.

pub(in crate::scan) mod token;

pub use token::TokenDecodeError;
