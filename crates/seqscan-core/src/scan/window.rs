use crate::scan::{
    cursor::ScanCursor,
    direction::Direction,
    domain::{SeqDomain, SeqRange},
};
use thiserror::Error as ThisError;

///
/// ScanWindow
///
/// Resolved scan geometry for one page: the full cursor-adjusted window
/// `[lo, hi)` of eligible candidate positions, and the budgeted sub-window
/// `[scan_lo, scan_hi)` the scanner actually walks. The rest of `[lo, hi)`
/// remains unscanned until a later page.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in crate::scan) struct ScanWindow {
    domain_lo: u64,
    domain_hi: u64,
    lo: u64,
    hi: u64,
    scan_lo: u64,
    scan_hi: u64,
}

impl ScanWindow {
    /// Resolve the window for one request.
    ///
    /// The cursor side is clamped into the domain; the opposite side is the
    /// domain edge itself (cross cursor/direction combinations are rejected
    /// before resolution). `scan_limit` must already be validated positive.
    pub(in crate::scan) fn resolve(
        domain: &SeqDomain,
        direction: Direction,
        cursor: Option<&ScanCursor>,
        scan_limit: Option<u64>,
    ) -> Result<Self, WindowError> {
        let domain_lo = domain.lo();
        let domain_hi = domain.hi();

        let mut lo = domain_lo;
        let mut hi = domain_hi;

        match direction {
            Direction::Forward => {
                if let Some(cursor) = cursor {
                    lo = lo.max(cursor.resume_lo());
                }
            }
            Direction::Backward => {
                if let Some(cursor) = cursor {
                    hi = hi.min(cursor.resume_hi());
                }
            }
        }

        if lo >= hi {
            return Err(WindowError::Empty);
        }

        let (scan_lo, scan_hi) = match scan_limit {
            None => (lo, hi),
            Some(limit) => match direction {
                Direction::Forward => (lo, hi.min(lo.saturating_add(limit))),
                Direction::Backward => (lo.max(hi.saturating_sub(limit)), hi),
            },
        };

        Ok(Self {
            domain_lo,
            domain_hi,
            lo,
            hi,
            scan_lo,
            scan_hi,
        })
    }

    /// The budgeted sub-window handed to the record source.
    pub(in crate::scan) const fn scan_range(&self) -> SeqRange {
        SeqRange::new(self.scan_lo, self.scan_hi)
    }

    pub(in crate::scan) const fn scan_lo(&self) -> u64 {
        self.scan_lo
    }

    pub(in crate::scan) const fn scan_hi(&self) -> u64 {
        self.scan_hi
    }

    /// Candidates exist in the domain below the scanned sub-window.
    pub(in crate::scan) const fn has_candidates_before(&self) -> bool {
        self.domain_lo < self.scan_lo
    }

    /// Candidates exist in the domain above the scanned sub-window.
    pub(in crate::scan) const fn has_candidates_after(&self) -> bool {
        self.scan_hi < self.domain_hi
    }

    /// Whether the sub-window edge consumed by a scan in `direction` is a
    /// budget (soft) edge rather than the window's own (hard) edge.
    pub(in crate::scan) const fn soft_edge(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.scan_hi < self.hi,
            Direction::Backward => self.lo < self.scan_lo,
        }
    }
}

///
/// WindowError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub(in crate::scan) enum WindowError {
    /// Not a caller-visible failure: the assembler converts this into a
    /// well-formed empty page.
    #[error("scan window is empty after clamping to domain bounds")]
    Empty,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{ScanWindow, WindowError};
    use crate::scan::{cursor::ScanCursor, direction::Direction, domain::SeqDomain};

    const WATERMARK: u64 = 99;

    fn domain() -> SeqDomain {
        SeqDomain::new(1, 10, WATERMARK)
    }

    #[test]
    fn forward_without_cursor_spans_the_domain() {
        let window = ScanWindow::resolve(&domain(), Direction::Forward, None, None)
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (1, 11));
        assert!(!window.has_candidates_before());
        assert!(!window.has_candidates_after());
        assert!(!window.soft_edge(Direction::Forward));
    }

    #[test]
    fn forward_scan_limit_bounds_the_sub_window() {
        let window = ScanWindow::resolve(&domain(), Direction::Forward, None, Some(2))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (1, 3));
        assert!(window.soft_edge(Direction::Forward));
        assert!(window.has_candidates_after());
        assert!(!window.has_candidates_before());
    }

    #[test]
    fn forward_match_cursor_resumes_strictly_after_the_record() {
        let after = ScanCursor::new(WATERMARK, 4, false);
        let window = ScanWindow::resolve(&domain(), Direction::Forward, Some(&after), Some(3))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (5, 8));
        assert!(window.has_candidates_before());
    }

    #[test]
    fn forward_scan_limited_cursor_resumes_at_the_position() {
        let after = ScanCursor::new(WATERMARK, 4, true);
        let window = ScanWindow::resolve(&domain(), Direction::Forward, Some(&after), Some(3))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (4, 7));
    }

    #[test]
    fn forward_cursor_below_the_domain_is_clamped_up() {
        let after = ScanCursor::new(WATERMARK, 0, true);
        let window = ScanWindow::resolve(&domain(), Direction::Forward, Some(&after), None)
            .expect("window should resolve");

        assert_eq!(window.scan_lo(), 1);
        assert!(!window.has_candidates_before());
    }

    #[test]
    fn forward_cursor_at_the_domain_edge_is_empty() {
        let after = ScanCursor::new(WATERMARK, 10, false);
        let err = ScanWindow::resolve(&domain(), Direction::Forward, Some(&after), None)
            .expect_err("window should be empty");

        assert_eq!(err, WindowError::Empty);
    }

    #[test]
    fn forward_cursor_beyond_the_domain_is_empty() {
        let after = ScanCursor::new(WATERMARK, 400, false);
        let err = ScanWindow::resolve(&domain(), Direction::Forward, Some(&after), Some(5))
            .expect_err("window should be empty");

        assert_eq!(err, WindowError::Empty);
    }

    #[test]
    fn empty_domain_is_empty() {
        let empty = SeqDomain::new(5, 4, WATERMARK);
        let err = ScanWindow::resolve(&empty, Direction::Forward, None, None)
            .expect_err("window should be empty");

        assert_eq!(err, WindowError::Empty);
    }

    #[test]
    fn backward_without_cursor_spans_the_domain() {
        let window = ScanWindow::resolve(&domain(), Direction::Backward, None, None)
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (1, 11));
        assert!(!window.soft_edge(Direction::Backward));
    }

    #[test]
    fn backward_scan_limit_bounds_the_sub_window_from_the_top() {
        let window = ScanWindow::resolve(&domain(), Direction::Backward, None, Some(2))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (9, 11));
        assert!(window.soft_edge(Direction::Backward));
        assert!(window.has_candidates_before());
        assert!(!window.has_candidates_after());
    }

    #[test]
    fn backward_match_cursor_resumes_strictly_below_the_record() {
        let before = ScanCursor::new(WATERMARK, 8, false);
        let window = ScanWindow::resolve(&domain(), Direction::Backward, Some(&before), Some(2))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (6, 8));
        assert!(window.has_candidates_after());
    }

    #[test]
    fn backward_scan_limited_cursor_resumes_at_the_position() {
        let before = ScanCursor::new(WATERMARK, 8, true);
        let window = ScanWindow::resolve(&domain(), Direction::Backward, Some(&before), Some(2))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (7, 9));
    }

    #[test]
    fn backward_cursor_at_the_domain_floor_is_empty() {
        let before = ScanCursor::new(WATERMARK, 1, false);
        let err = ScanWindow::resolve(&domain(), Direction::Backward, Some(&before), None)
            .expect_err("window should be empty");

        assert_eq!(err, WindowError::Empty);
    }

    #[test]
    fn oversized_scan_limit_degrades_to_the_full_window() {
        let window = ScanWindow::resolve(&domain(), Direction::Forward, None, Some(u64::MAX))
            .expect("window should resolve");

        assert_eq!((window.scan_lo(), window.scan_hi()), (1, 11));
        assert!(!window.soft_edge(Direction::Forward));
    }
}
