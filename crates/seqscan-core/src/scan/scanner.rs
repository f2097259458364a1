use crate::scan::{
    direction::Direction,
    source::{FilterPredicate, RecordSource},
    window::ScanWindow,
};

///
/// ScanStopKind
///
/// Stop cause stripped of payload, for trace consumers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanStopKind {
    Filled,
    Truncated,
    Exhausted,
}

///
/// ScanStop
///
/// Why a scan stopped. The soft/hard boundary distinction is carried as
/// explicit tagged state so the assembler never infers it from match counts.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in crate::scan) enum ScanStop {
    /// Page size satisfied and a further match proven by the overflow probe.
    Filled,

    /// The scan budget was consumed with window remainder left; `resume` is
    /// the first position, in scan direction, the scan did not examine.
    Truncated { resume: u64 },

    /// The window's own boundary was reached; nothing remains in range.
    Exhausted,
}

impl ScanStop {
    pub(in crate::scan) const fn kind(&self) -> ScanStopKind {
        match self {
            Self::Filled => ScanStopKind::Filled,
            Self::Truncated { .. } => ScanStopKind::Truncated,
            Self::Exhausted => ScanStopKind::Exhausted,
        }
    }
}

///
/// ScanOutcome
///
/// Result of walking one budgeted sub-window: matches in scan order
/// (descending for backward scans; the assembler restores domain order),
/// the number of candidates examined, and the stop cause.
///

#[derive(Debug)]
pub(in crate::scan) struct ScanOutcome<R> {
    pub(in crate::scan) matches: Vec<R>,
    pub(in crate::scan) examined: u64,
    pub(in crate::scan) stop: ScanStop,
}

/// Walk the resolved sub-window, filtering candidates until the page is
/// satisfied or the sub-window is consumed.
///
/// Collects up to `page_size` matches. When one more match surfaces before
/// the sub-window ends, it is treated as an overflow probe: the scan stops,
/// the probe is dropped, and the next page re-finds it from the boundary
/// cursor.
pub(in crate::scan) fn run_scan<S, P>(
    source: &S,
    predicate: &P,
    window: &ScanWindow,
    direction: Direction,
    page_size: u32,
) -> Result<ScanOutcome<S::Record>, S::Error>
where
    S: RecordSource,
    P: FilterPredicate<S::Record>,
{
    let range = window.scan_range();
    let keep = page_size as usize;

    let mut scan = source.scan(range, direction)?;
    let mut matches: Vec<S::Record> = Vec::new();
    let mut examined: u64 = 0;

    loop {
        let Some(item) = scan.next() else {
            // Sub-window consumed: classify the edge that stopped us.
            let stop = if window.soft_edge(direction) {
                let resume = match direction {
                    Direction::Forward => range.hi,
                    // A soft low edge implies scan_lo > lo >= 0.
                    Direction::Backward => range.lo.saturating_sub(1),
                };
                ScanStop::Truncated { resume }
            } else {
                ScanStop::Exhausted
            };

            return Ok(ScanOutcome {
                matches,
                examined,
                stop,
            });
        };

        let record = item?;
        examined = examined.saturating_add(1);

        if predicate.matches(&record) {
            if matches.len() == keep {
                return Ok(ScanOutcome {
                    matches,
                    examined,
                    stop: ScanStop::Filled,
                });
            }
            matches.push(record);
        }
    }
}

///
/// TESTS
///
