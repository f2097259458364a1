use crate::scan::{
    Direction, PageRequest, Paginator, RecordSource, ScanCursor, ScanPage, SeqDomain, SeqRange,
    Sequenced,
};
use thiserror::Error as ThisError;


///
/// TxRecord
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TxRecord {
    position: u64,
    sender: u8,
}

impl Sequenced for TxRecord {
    fn position(&self) -> u64 {
        self.position
    }
}

///
/// LedgerFault
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("ledger store unavailable")]
struct LedgerFault;

///
/// MemoryLedger
///
/// In-memory record source: a run of transactions ordered by position, with
/// an optional position at which the backing store starts failing.
///

struct MemoryLedger {
    records: Vec<TxRecord>,
    fail_at: Option<u64>,
}

impl MemoryLedger {
    fn new(records: Vec<TxRecord>) -> Self {
        Self {
            records,
            fail_at: None,
        }
    }

    /// Dense positions `first..=last` with `sender(position)` per record.
    fn dense(first: u64, last: u64, sender: impl Fn(u64) -> u8) -> Self {
        Self::new(
            (first..=last)
                .map(|position| TxRecord {
                    position,
                    sender: sender(position),
                })
                .collect(),
        )
    }

    fn failing_at(mut self, position: u64) -> Self {
        self.fail_at = Some(position);
        self
    }
}

impl RecordSource for MemoryLedger {
    type Record = TxRecord;
    type Error = LedgerFault;
    type Scan = std::vec::IntoIter<Result<TxRecord, LedgerFault>>;

    fn scan(&self, range: SeqRange, direction: Direction) -> Result<Self::Scan, LedgerFault> {
        let mut rows: Vec<TxRecord> = self
            .records
            .iter()
            .copied()
            .filter(|record| range.contains(record.position))
            .collect();
        rows.sort_unstable_by_key(|record| record.position);
        if !direction.is_forward() {
            rows.reverse();
        }

        let fail_at = self.fail_at;
        Ok(rows
            .into_iter()
            .map(move |record| match fail_at {
                Some(fail) if record.position == fail => Err(LedgerFault),
                _ => Ok(record),
            })
            .collect::<Vec<_>>()
            .into_iter())
    }
}

const FIXTURE_SENDER: u8 = 7;
const FIXTURE_WATERMARK: u64 = 42;

// Ledger of transactions at positions 1..=10 where {2, 4, 6, 8} carry the
// fixture sender.
fn fixture_ledger() -> MemoryLedger {
    MemoryLedger::dense(1, 10, |position| {
        if matches!(position, 2 | 4 | 6 | 8) {
            FIXTURE_SENDER
        } else {
            1
        }
    })
}

fn fixture_domain() -> SeqDomain {
    SeqDomain::new(1, 10, FIXTURE_WATERMARK)
}

fn sent_by_fixture_sender(tx: &TxRecord) -> bool {
    tx.sender == FIXTURE_SENDER
}

fn decode(token: &str) -> ScanCursor {
    ScanCursor::decode(token).expect("emitted cursor should decode")
}

fn positions(page: &ScanPage<TxRecord>) -> Vec<u64> {
    page.records().map(|record| record.position).collect()
}

// Assert the scan-direction boundary invariant: a scan-limited boundary
// cursor only ever appears on a short page.
fn assert_boundary_provenance(page: &ScanPage<TxRecord>, boundary: Option<&str>, page_size: u32) {
    if page_size == 0 {
        return;
    }
    if let Some(token) = boundary
        && decode(token).is_scan_limited()
    {
        assert!(
            page.edges().len() < page_size as usize,
            "scan-limited boundary cursors only appear on short pages"
        );
    }
}

// Chain forward pages through `endCursor -> after` until no next page,
// collecting matched positions in order.
fn collect_forward(
    paginator: &Paginator<MemoryLedger>,
    domain: &SeqDomain,
    page_size: u32,
    scan_limit: Option<u64>,
    predicate: impl Fn(&TxRecord) -> bool,
    max_pages: usize,
) -> Vec<u64> {
    let mut cursor: Option<String> = None;
    let mut collected = Vec::new();
    let mut pages = 0usize;

    loop {
        pages += 1;
        assert!(pages <= max_pages, "pagination must terminate");

        let mut request = PageRequest::first(page_size);
        if let Some(limit) = scan_limit {
            request = request.scan_limit(limit);
        }
        if let Some(token) = cursor.take() {
            request = request.after(token);
        }

        let page = paginator
            .paginate(domain, &request, &predicate)
            .expect("paged execution should succeed");

        assert!(
            page.edges().len() <= page_size as usize,
            "page must respect the requested size"
        );
        assert_boundary_provenance(&page, page.page_info().end_cursor.as_deref(), page_size);

        collected.extend(positions(&page));

        match (
            page.page_info().has_next_page,
            page.page_info().end_cursor.clone(),
        ) {
            (true, Some(next)) => cursor = Some(next),
            _ => break,
        }
    }

    collected
}

// Chain backward pages through `startCursor -> before`, collecting matched
// positions in ascending order.
fn collect_backward(
    paginator: &Paginator<MemoryLedger>,
    domain: &SeqDomain,
    page_size: u32,
    scan_limit: Option<u64>,
    predicate: impl Fn(&TxRecord) -> bool,
    max_pages: usize,
) -> Vec<u64> {
    let mut cursor: Option<String> = None;
    let mut collected: Vec<u64> = Vec::new();
    let mut pages = 0usize;

    loop {
        pages += 1;
        assert!(pages <= max_pages, "pagination must terminate");

        let mut request = PageRequest::last(page_size);
        if let Some(limit) = scan_limit {
            request = request.scan_limit(limit);
        }
        if let Some(token) = cursor.take() {
            request = request.before(token);
        }

        let page = paginator
            .paginate(domain, &request, &predicate)
            .expect("paged execution should succeed");

        assert!(
            page.edges().len() <= page_size as usize,
            "page must respect the requested size"
        );
        assert_boundary_provenance(&page, page.page_info().start_cursor.as_deref(), page_size);

        let mut chunk = positions(&page);
        chunk.extend(collected);
        collected = chunk;

        match (
            page.page_info().has_previous_page,
            page.page_info().start_cursor.clone(),
        ) {
            (true, Some(prev)) => cursor = Some(prev),
            _ => break,
        }
    }

    collected
}
