use crate::scan::{
    cursor::{CursorError, ScanCursor},
    direction::Direction,
    scanner::{ScanOutcome, ScanStop},
    source::Sequenced,
    window::ScanWindow,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// PageInfo
///
/// Connection-style page metadata. Boundary cursors are opaque tokens; a
/// `scan_limited` boundary cursor points at scan progress rather than a
/// returned record.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageInfo {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

///
/// Edge
/// One returned record plus the cursor naming its own position.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edge<R> {
    pub cursor: String,
    pub record: R,
}

///
/// ScanPage
///
/// One assembled page: matching records in ascending domain order, plus
/// `PageInfo`. Constructed fresh per request and never persisted.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct ScanPage<R> {
    #[deref]
    edges: Vec<Edge<R>>,
    page_info: PageInfo,
}

impl<R> ScanPage<R> {
    pub(in crate::scan) const fn new(edges: Vec<Edge<R>>, page_info: PageInfo) -> Self {
        Self { edges, page_info }
    }

    /// A page with no matches, no cursors, and both flags false.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo {
                start_cursor: None,
                end_cursor: None,
                has_next_page: false,
                has_previous_page: false,
            },
        }
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge<R>] {
        &self.edges
    }

    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Iterate the returned records in ascending domain order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.edges.iter().map(|edge| &edge.record)
    }

    /// Consume this page and return `(edges, page_info)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<R>>, PageInfo) {
        (self.edges, self.page_info)
    }
}

/// Convert one scan outcome into an assembled page.
///
/// The scan-direction boundary (`end` forward, `start` backward) reflects the
/// stop cause: a budget stop on a short page emits a `scan_limited` cursor at
/// the scanner's resume position so the next page continues exactly where the
/// budget ran out. The opposite boundary is anchored to the incoming cursor
/// whenever a scan limit is in play, flipping to a plain match cursor when the
/// anchor position is itself a returned record.
pub(in crate::scan) fn assemble_page<R>(
    outcome: ScanOutcome<R>,
    window: &ScanWindow,
    direction: Direction,
    page_size: u32,
    incoming: Option<&ScanCursor>,
    scan_limit_active: bool,
    hint: u64,
) -> Result<ScanPage<R>, CursorError>
where
    R: Sequenced,
{
    let ScanOutcome { mut matches, stop, .. } = outcome;

    // Backward scans collect descending; pages always read ascending.
    if !direction.is_forward() {
        matches.reverse();
    }

    let short = matches.len() < page_size as usize;
    let first_pos = matches.first().map(Sequenced::position);
    let last_pos = matches.last().map(Sequenced::position);

    let match_cursor = |position: u64| ScanCursor::new(hint, position, false);
    let limited_cursor = |position: u64| ScanCursor::new(hint, position, true);

    // Boundary on the scan-direction side: driven by the stop cause.
    let scan_edge_pos = if direction.is_forward() {
        last_pos
    } else {
        first_pos
    };
    let (scan_edge_open, scan_edge_cursor) = match stop {
        ScanStop::Filled => (true, scan_edge_pos.map(match_cursor)),
        ScanStop::Truncated { resume } if short || matches.is_empty() => {
            (true, Some(limited_cursor(resume)))
        }
        ScanStop::Truncated { .. } => (true, scan_edge_pos.map(match_cursor)),
        ScanStop::Exhausted => (false, scan_edge_pos.map(match_cursor)),
    };

    // Boundary on the opposite side: anchored to the incoming cursor.
    let (anchor_pos, anchor_match_pos, anchor_open) = if direction.is_forward() {
        (window.scan_lo(), first_pos, window.has_candidates_before())
    } else {
        (
            window.scan_hi().saturating_sub(1),
            last_pos,
            window.has_candidates_after(),
        )
    };
    let anchored_cursor = if matches.is_empty() {
        match stop {
            // A scanned-but-empty sub-window is bounded on both sides so the
            // next page in either direction resumes past it.
            ScanStop::Truncated { .. } => Some(limited_cursor(anchor_pos)),
            ScanStop::Filled | ScanStop::Exhausted => None,
        }
    } else if let Some(incoming) = incoming
        && (scan_limit_active || incoming.is_scan_limited())
    {
        if anchor_match_pos == Some(anchor_pos) {
            anchor_match_pos.map(match_cursor)
        } else {
            Some(limited_cursor(anchor_pos))
        }
    } else {
        anchor_match_pos.map(match_cursor)
    };

    let (start, end, has_previous_page, has_next_page) = if direction.is_forward() {
        (anchored_cursor, scan_edge_cursor, anchor_open, scan_edge_open)
    } else {
        (scan_edge_cursor, anchored_cursor, scan_edge_open, anchor_open)
    };

    let page_info = PageInfo {
        start_cursor: start.map(|cursor| cursor.encode()).transpose()?,
        end_cursor: end.map(|cursor| cursor.encode()).transpose()?,
        has_next_page,
        has_previous_page,
    };

    let edges = matches
        .into_iter()
        .map(|record| {
            let cursor = match_cursor(record.position()).encode()?;
            Ok(Edge { cursor, record })
        })
        .collect::<Result<Vec<_>, CursorError>>()?;

    Ok(ScanPage::new(edges, page_info))
}

///
/// TESTS
///
