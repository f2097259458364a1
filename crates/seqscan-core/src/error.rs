use crate::scan::{CursorError, RequestError};
use thiserror::Error as ThisError;

///
/// PaginateError
///
/// Terminal failure of one pagination request. Every variant is detected
/// before or during scanning and aborts the request synchronously; no
/// partial page is ever returned alongside an error, and no retries are
/// performed internally.
///
/// An empty scan window is deliberately absent here: it is a well-formed
/// empty page, not a failure.
///

#[derive(Debug, ThisError)]
pub enum PaginateError<E>
where
    E: std::error::Error + 'static,
{
    /// Structurally invalid cursor token; surfaced to the caller untouched.
    #[error("malformed cursor: {0}")]
    MalformedCursor(#[from] CursorError),

    /// Invalid argument combination, detected before any cursor decoding.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Emitting a boundary cursor failed while assembling the page.
    #[error("failed to encode cursor: {0}")]
    CursorEncode(CursorError),

    /// The external ordered source failed mid-scan.
    #[error("record source unavailable: {source}")]
    SourceUnavailable {
        #[source]
        source: E,
    },
}

///
/// TESTS
///
