//! Scan-budgeted cursor pagination over append-only ordered sequences.
//!
//! One request flows through four stages: argument validation, cursor
//! decoding, window resolution, and a budgeted filtered scan whose outcome
//! is assembled into a page. No partial results are exposed between stages;
//! the whole page is constructed atomically before returning.

pub(crate) mod codec;
mod cursor;
mod direction;
mod domain;
mod limits;
mod page;
mod request;
mod scanner;
mod source;
mod trace;
mod window;

#[cfg(test)]
mod tests;

pub use codec::TokenDecodeError;
pub use cursor::{CursorError, ScanCursor};
pub use direction::Direction;
pub use domain::{SeqDomain, SeqRange};
pub use limits::ScanLimits;
pub use page::{Edge, PageInfo, ScanPage};
pub use request::{PageRequest, RequestError};
pub use scanner::ScanStopKind;
pub use source::{FilterPredicate, RecordSource, Sequenced};
pub use trace::{ScanTraceEvent, ScanTraceSink};

use crate::error::PaginateError;
use crate::scan::{
    page::assemble_page,
    scanner::run_scan,
    window::{ScanWindow, WindowError},
};

///
/// Paginator
///
/// Read-only pagination engine over one record source. Stateless across
/// requests (cursors carry all resumption state), so one paginator may
/// serve any number of concurrent requests.
///

pub struct Paginator<S> {
    source: S,
    limits: ScanLimits,
    trace: Option<Box<dyn ScanTraceSink>>,
}

impl<S> Paginator<S>
where
    S: RecordSource,
{
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            limits: ScanLimits::default(),
            trace: None,
        }
    }

    /// Replace the default service limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Attach a trace sink. Tracing never affects pagination semantics.
    #[must_use]
    pub fn with_trace(mut self, sink: Box<dyn ScanTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn limits(&self) -> &ScanLimits {
        &self.limits
    }

    /// Serve one page of records matching `predicate` from `domain`.
    ///
    /// An empty window (cursor at or beyond the domain edge, or an empty
    /// domain) yields a well-formed empty page, not an error.
    pub fn paginate<P>(
        &self,
        domain: &SeqDomain,
        request: &PageRequest,
        predicate: &P,
    ) -> Result<ScanPage<S::Record>, PaginateError<S::Error>>
    where
        P: FilterPredicate<S::Record>,
    {
        let args = request.validate(&self.limits)?;

        let cursor = match args.cursor_token {
            Some(token) => Some(ScanCursor::decode(token)?),
            None => None,
        };

        // Emitted cursors inherit the incoming cursor's watermark when one
        // was supplied, so a paginated walk stays pinned to one view.
        let hint = cursor.as_ref().map_or(domain.watermark(), ScanCursor::hint);

        let window =
            match ScanWindow::resolve(domain, args.direction, cursor.as_ref(), args.scan_limit) {
                Ok(window) => window,
                Err(WindowError::Empty) => {
                    self.emit(ScanTraceEvent::WindowEmpty {
                        direction: args.direction,
                    });
                    return Ok(ScanPage::empty());
                }
            };

        self.emit(ScanTraceEvent::WindowResolved {
            direction: args.direction,
            scan_lo: window.scan_lo(),
            scan_hi: window.scan_hi(),
        });

        let outcome = run_scan(
            &self.source,
            predicate,
            &window,
            args.direction,
            args.page_size,
        )
        .map_err(|source| PaginateError::SourceUnavailable { source })?;

        self.emit(ScanTraceEvent::ScanFinished {
            direction: args.direction,
            examined: outcome.examined,
            matched: u64::try_from(outcome.matches.len()).unwrap_or(u64::MAX),
            stop: outcome.stop.kind(),
        });

        assemble_page(
            outcome,
            &window,
            args.direction,
            args.page_size,
            cursor.as_ref(),
            args.scan_limit.is_some(),
            hint,
        )
        .map_err(PaginateError::CursorEncode)
    }

    fn emit(&self, event: ScanTraceEvent) {
        if let Some(sink) = self.trace.as_deref() {
            sink.on_event(event);
        }
    }
}
