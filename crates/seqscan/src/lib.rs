//! SeqScan — scan-budgeted, cursor-resumable pagination over append-only
//! ordered sequences.
//!
//! ## Crate layout
//! - `core`: the pagination engine — cursor codec, window resolver, filtered
//!   scanner, and page assembler, plus the source/predicate seams.
//!
//! The `prelude` module mirrors the surface a serving layer uses to drive
//! pagination.

pub use seqscan_core as core;

pub use seqscan_core::{error::PaginateError, scan};

pub mod prelude {
    pub use seqscan_core::prelude::*;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
