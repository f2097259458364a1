use crate::scan::{direction::Direction, limits::ScanLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PageRequest
///
/// Raw query-level pagination arguments as received from the transport
/// layer. Exactly one of `first`/`last` selects the page size and scan
/// direction; `after` pairs with `first` and `before` with `last`;
/// `scan_limit` bounds how many candidates one page may examine (absent
/// means unbounded).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PageRequest {
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub scan_limit: Option<u64>,
}

impl PageRequest {
    /// Request the first `size` matches, scanning forward.
    #[must_use]
    pub fn first(size: u32) -> Self {
        Self {
            first: Some(size),
            ..Self::default()
        }
    }

    /// Request the last `size` matches, scanning backward.
    #[must_use]
    pub fn last(size: u32) -> Self {
        Self {
            last: Some(size),
            ..Self::default()
        }
    }

    /// Resume forward pagination after an opaque cursor token.
    #[must_use]
    pub fn after(mut self, token: impl Into<String>) -> Self {
        self.after = Some(token.into());
        self
    }

    /// Resume backward pagination before an opaque cursor token.
    #[must_use]
    pub fn before(mut self, token: impl Into<String>) -> Self {
        self.before = Some(token.into());
        self
    }

    /// Bound the number of candidates this page may examine.
    #[must_use]
    pub const fn scan_limit(mut self, limit: u64) -> Self {
        self.scan_limit = Some(limit);
        self
    }

    /// Validate the argument combination against the service limits.
    ///
    /// All argument-shape errors are raised here, before any cursor decoding
    /// or scanning begins.
    pub(in crate::scan) fn validate(&self, limits: &ScanLimits) -> Result<PageArgs<'_>, RequestError> {
        let (direction, page_size) = match (self.first, self.last) {
            (Some(first), None) => (Direction::Forward, first),
            (None, Some(last)) => (Direction::Backward, last),
            _ => return Err(RequestError::ConflictingPageSelectors),
        };

        match direction {
            Direction::Forward if self.before.is_some() => {
                return Err(RequestError::BeforeWithFirst);
            }
            Direction::Backward if self.after.is_some() => {
                return Err(RequestError::AfterWithLast);
            }
            _ => {}
        }

        if page_size > limits.max_page_size {
            return Err(RequestError::PageTooLarge {
                size: page_size,
                max: limits.max_page_size,
            });
        }

        if let Some(scan_limit) = self.scan_limit {
            if scan_limit == 0 {
                return Err(RequestError::InvalidScanLimit);
            }
            if scan_limit > limits.max_scan_limit {
                return Err(RequestError::ScanLimitTooLarge {
                    limit: scan_limit,
                    max: limits.max_scan_limit,
                });
            }
        }

        let cursor_token = match direction {
            Direction::Forward => self.after.as_deref(),
            Direction::Backward => self.before.as_deref(),
        };

        Ok(PageArgs {
            direction,
            page_size,
            cursor_token,
            scan_limit: self.scan_limit,
        })
    }
}

///
/// PageArgs
///
/// Validated argument combination; the cursor token is still opaque here and
/// decoded by the pagination entry point.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in crate::scan) struct PageArgs<'a> {
    pub(in crate::scan) direction: Direction,
    pub(in crate::scan) page_size: u32,
    pub(in crate::scan) cursor_token: Option<&'a str>,
    pub(in crate::scan) scan_limit: Option<u64>,
}

///
/// RequestError
/// Argument-shape failures detected before any scanning.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RequestError {
    #[error("exactly one of `first` or `last` must be given")]
    ConflictingPageSelectors,

    #[error("`after` cannot be combined with `last`")]
    AfterWithLast,

    #[error("`before` cannot be combined with `first`")]
    BeforeWithFirst,

    #[error("scan limit must be positive")]
    InvalidScanLimit,

    #[error("scan limit {limit} exceeds max scan limit {max}")]
    ScanLimitTooLarge { limit: u64, max: u64 },

    #[error("page size {size} exceeds max page size {max}")]
    PageTooLarge { size: u32, max: u32 },
}

///
/// TESTS
///
