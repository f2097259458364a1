use crate::{
    scan::codec::token::{decode_token, encode_token},
    serialize::{deserialize_bounded, serialize},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

pub use crate::scan::codec::TokenDecodeError;

const MAX_CURSOR_WIRE_BYTES: usize = 256;

///
/// ScanCursor
///
/// Decoded pagination cursor: a stable sequence position plus provenance.
///
/// `scan_limited` records whether `position` was derived from exhausting a
/// scan budget rather than from a returned record, which changes the resume
/// boundary:
/// - a match cursor (`scan_limited = false`) names a record the caller
///   already holds, so resumption excludes it;
/// - a scan-limited cursor names the first position the truncated scan never
///   examined, so resumption includes it.
///
/// `hint` is advisory locality metadata (e.g. the sealed-checkpoint
/// watermark the page was viewed at); it is carried verbatim and never
/// validated against domain bounds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanCursor {
    hint: u64,
    position: u64,
    scan_limited: bool,
}

impl ScanCursor {
    #[must_use]
    pub const fn new(hint: u64, position: u64, scan_limited: bool) -> Self {
        Self {
            hint,
            position,
            scan_limited,
        }
    }

    #[must_use]
    pub const fn hint(&self) -> u64 {
        self.hint
    }

    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[must_use]
    pub const fn is_scan_limited(&self) -> bool {
        self.scan_limited
    }

    /// First position a forward resume from this cursor may examine.
    pub(in crate::scan) const fn resume_lo(&self) -> u64 {
        if self.scan_limited {
            self.position
        } else {
            self.position.saturating_add(1)
        }
    }

    /// Exclusive upper bound a backward resume from this cursor may examine.
    pub(in crate::scan) const fn resume_hi(&self) -> u64 {
        if self.scan_limited {
            self.position.saturating_add(1)
        } else {
            self.position
        }
    }

    /// Encode this cursor as an opaque hex token.
    pub fn encode(&self) -> Result<String, CursorError> {
        let wire = CursorWire {
            version: CursorVersion::V1.encode(),
            hint: self.hint,
            position: self.position,
            scan_limited: self.scan_limited,
        };
        let bytes = serialize(&wire).map_err(|err| CursorError::Encode(err.to_string()))?;

        Ok(encode_token(&bytes))
    }

    /// Decode an opaque hex token back into a cursor.
    ///
    /// Decoding performs no validation of `position` against domain bounds;
    /// that is the window resolver's responsibility.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = decode_token(token)?;
        let wire: CursorWire = deserialize_bounded(&bytes, MAX_CURSOR_WIRE_BYTES)
            .map_err(|err| CursorError::Decode(err.to_string()))?;

        // Decode the wire version first so compatibility behavior remains
        // centralized.
        let _version = CursorVersion::decode(wire.version)?;

        Ok(Self::new(wire.hint, wire.position, wire.scan_limited))
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(&self, version: u8) -> Result<String, CursorError> {
        let wire = CursorWire {
            version,
            hint: self.hint,
            position: self.position,
            scan_limited: self.scan_limited,
        };
        let bytes = serialize(&wire).map_err(|err| CursorError::Encode(err.to_string()))?;

        Ok(encode_token(&bytes))
    }
}

///
/// CursorError
/// Cursor token encoding/decoding failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorError {
    #[error("malformed cursor token: {0}")]
    Token(#[from] TokenDecodeError),

    #[error("failed to decode cursor payload: {0}")]
    Decode(String),

    #[error("failed to encode cursor payload: {0}")]
    Encode(String),

    #[error("unsupported cursor version: {version}")]
    UnsupportedVersion { version: u8 },
}

///
/// CursorVersion
///
/// Wire-level cursor version owned by the cursor protocol boundary. This
/// keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CursorVersion {
    V1,
}

impl CursorVersion {
    const V1_TAG: u8 = 1;

    // Decode one raw wire version into the protocol enum.
    const fn decode(raw: u8) -> Result<Self, CursorError> {
        match raw {
            Self::V1_TAG => Ok(Self::V1),
            version => Err(CursorError::UnsupportedVersion { version }),
        }
    }

    // Encode this protocol version for wire format output.
    const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// CursorWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct CursorWire {
    version: u8,
    hint: u64,
    position: u64,
    #[serde(default)]
    scan_limited: bool,
}

///
/// TESTS
///
