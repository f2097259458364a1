//! Core engine for SeqScan: scan-budgeted, bidirectional, cursor-resumable
//! pagination over append-only ordered record sequences.
#![warn(unreachable_pub)]

pub mod error;
pub mod scan;
pub mod serialize;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::scan::{
        Direction, FilterPredicate, PageRequest, Paginator, RecordSource, ScanCursor, ScanLimits,
        ScanPage, SeqDomain, SeqRange, Sequenced,
    };
}
