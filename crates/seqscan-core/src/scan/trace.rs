//! Pagination tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! pagination semantics.

use crate::scan::{direction::Direction, scanner::ScanStopKind};

///
/// ScanTraceSink
///

pub trait ScanTraceSink: Send + Sync {
    fn on_event(&self, event: ScanTraceEvent);
}

///
/// ScanTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanTraceEvent {
    /// The request resolved to a scannable window.
    WindowResolved {
        direction: Direction,
        scan_lo: u64,
        scan_hi: u64,
    },

    /// The window collapsed after clamping; an empty page is returned.
    WindowEmpty { direction: Direction },

    /// The scan completed and the page is about to be assembled.
    ScanFinished {
        direction: Direction,
        examined: u64,
        matched: u64,
        stop: ScanStopKind,
    },
}

///
/// TESTS
///
