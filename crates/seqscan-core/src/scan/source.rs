use crate::scan::{direction::Direction, domain::SeqRange};

///
/// Sequenced
///
/// A record addressable by its position in the append-only ordered sequence.
/// Positions are unique, monotonically increasing, and gap-free within the
/// domain of one scan.
///

pub trait Sequenced {
    fn position(&self) -> u64;
}

///
/// FilterPredicate
///
/// Pure per-candidate filter. Evaluated at most once per scanned candidate;
/// must be side-effect free and independent of evaluation order.
///

pub trait FilterPredicate<R> {
    fn matches(&self, record: &R) -> bool;
}

impl<R, F> FilterPredicate<R> for F
where
    F: Fn(&R) -> bool,
{
    fn matches(&self, record: &R) -> bool {
        self(record)
    }
}

///
/// RecordSource
///
/// Seam to the external ordered storage layer. A source yields the committed
/// candidate records whose positions fall in a half-open range, in the order
/// implied by `direction` (ascending positions for `Forward`, descending for
/// `Backward`).
///
/// Visibility ("committed once the containing checkpoint is sealed") is
/// owned by the source; the engine never sees uncommitted records.
///

pub trait RecordSource {
    type Record: Sequenced;
    type Error: std::error::Error + Send + Sync + 'static;
    type Scan: Iterator<Item = Result<Self::Record, Self::Error>>;

    /// Open an ordered scan over the committed candidates in `range`.
    ///
    /// A failure here, or from the returned iterator, aborts the request; the
    /// engine performs no internal retries.
    fn scan(&self, range: SeqRange, direction: Direction) -> Result<Self::Scan, Self::Error>;
}
