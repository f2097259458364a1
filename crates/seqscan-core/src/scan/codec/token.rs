// Defensive decode bound for untrusted cursor token input. The wire payload
// is a small fixed triple, so anything near this limit is garbage.
const MAX_TOKEN_HEX_LEN: usize = 512;

///
/// TokenDecodeError
///

#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
pub enum TokenDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },
}

/// Encode raw cursor payload bytes as a lowercase hex token.
#[must_use]
pub(in crate::scan) fn encode_token(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        use std::fmt::Write as _;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Decode a lowercase/uppercase hex cursor token into raw payload bytes.
///
/// The token may include surrounding whitespace, which is trimmed.
pub(in crate::scan) fn decode_token(token: &str) -> Result<Vec<u8>, TokenDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(TokenDecodeError::Empty);
    }

    if token.len() > MAX_TOKEN_HEX_LEN {
        return Err(TokenDecodeError::TooLong {
            len: token.len(),
            max: MAX_TOKEN_HEX_LEN,
        });
    }

    if !token.len().is_multiple_of(2) {
        return Err(TokenDecodeError::OddLength);
    }

    let mut out = Vec::with_capacity(token.len() / 2);
    let bytes = token.as_bytes();

    for idx in (0..bytes.len()).step_by(2) {
        let hi = decode_hex_nibble(bytes[idx])
            .ok_or(TokenDecodeError::InvalidHex { position: idx + 1 })?;

        let lo = decode_hex_nibble(bytes[idx + 1])
            .ok_or(TokenDecodeError::InvalidHex { position: idx + 2 })?;

        out.push((hi << 4) | lo);
    }

    Ok(out)
}

const fn decode_hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

///
/// TESTS
///
