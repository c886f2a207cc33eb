//! Pagination controller: decides which line range to fetch next and folds
//! fetch results into the window.
//!
//! Pure state machine. Operations that need a fetch return the [`FetchRequest`]
//! to issue; the shell runs it and feeds the [`FetchCompletion`] back through
//! [`PaginationController::on_fetch_complete`].
//!
//! # State Machine
//!
//! ```text
//!              select_log / jump_to_line (any state with a log)
//!                          │
//!   Idle ──select_log──► Loading ──success, full──► Ready ──load_more──► Loading
//!                          │  │
//!                          │  └──success, short──► Exhausted (terminal for this window)
//!                          └──failure──► Failed ──retry──► Loading
//! ```
//!
//! Every `select_log` and `jump_to_line` bumps the [`Generation`]. A completion
//! stamped with any other generation, or not matching the request in flight,
//! is discarded without touching state.

use crate::model::{
    ContentFetchError, FetchCompletion, FetchRequest, Generation, LineNumber, LinePage, LogFile,
    LogId, PageSize,
};
use crate::state::page::resolve_jump;
use crate::state::window::WindowBuffer;
use tracing::{debug, error, info, warn};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No log selected.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Window is valid and more lines may exist.
    Ready,
    /// End of file reached; no further fetch for this window.
    Exhausted,
    /// Last fetch failed; window content from before the failure is kept.
    Failed,
}

/// What [`PaginationController::on_fetch_complete`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Lines were added to the window.
    Applied,
    /// The fetch failed and the controller moved to `Failed`.
    Failed,
    /// The completion belonged to an older window or request and was dropped.
    Stale,
}

/// Borrowed view of the controller for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSnapshot<'a> {
    pub lines: &'a [String],
    pub first_line_number: LineNumber,
    pub is_loading: bool,
    pub has_more: bool,
    pub error: Option<&'a ContentFetchError>,
}

/// Owns the window and pagination state for the currently selected log.
#[derive(Debug, Clone)]
pub struct PaginationController {
    page_size: PageSize,
    selected: Option<LogFile>,
    window: WindowBuffer,
    /// First line of the next fetch. Always equals `window.next_line_number()`.
    current_page_start: LineNumber,
    has_more: bool,
    phase: Phase,
    last_error: Option<ContentFetchError>,
    generation: Generation,
    in_flight: Option<FetchRequest>,
}

impl PaginationController {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            selected: None,
            window: WindowBuffer::default(),
            current_page_start: LineNumber::FIRST,
            has_more: true,
            phase: Phase::Idle,
            last_error: None,
            generation: Generation::default(),
            in_flight: None,
        }
    }

    // ===== Accessors =====

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn selected_log(&self) -> Option<&LogFile> {
        self.selected.as_ref()
    }

    pub fn window(&self) -> &WindowBuffer {
        &self.window
    }

    pub fn current_page_start(&self) -> LineNumber {
        self.current_page_start
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn last_error(&self) -> Option<&ContentFetchError> {
        self.last_error.as_ref()
    }

    /// Request currently awaiting completion, if any.
    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    pub fn snapshot(&self) -> PaginationSnapshot<'_> {
        PaginationSnapshot {
            lines: self.window.lines(),
            first_line_number: self.window.first_line_number(),
            is_loading: self.is_loading(),
            has_more: self.has_more,
            error: self.last_error.as_ref(),
        }
    }

    // ===== Transitions =====

    /// Switch to `log`, discarding the current window. Valid from any state.
    pub fn select_log(&mut self, log: LogFile) -> FetchRequest {
        info!(log_id = %log.id(), name = log.name(), "Selecting log");
        let log_id = log.id().clone();
        self.selected = Some(log);
        self.start_window(log_id, LineNumber::FIRST)
    }

    /// Restart the window at the page containing line `n`.
    ///
    /// Returns `None` (and changes nothing) when no log is selected.
    pub fn jump_to_line(&mut self, n: LineNumber) -> Option<FetchRequest> {
        let Some(log_id) = self.selected.as_ref().map(|log| log.id().clone()) else {
            debug!(line = %n, "Jump ignored: no log selected");
            return None;
        };
        let target = resolve_jump(n, self.page_size);
        info!(line = %n, page_start = %target, "Jumping to line");
        Some(self.start_window(log_id, target))
    }

    /// Fetch the page after the last buffered line. Only valid from `Ready`.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.phase != Phase::Ready {
            debug!(phase = ?self.phase, "load_more ignored");
            return None;
        }
        let log_id = self.selected.as_ref()?.id().clone();
        Some(self.issue(log_id))
    }

    /// Re-issue the fetch that failed. Only valid from `Failed`.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.phase != Phase::Failed {
            debug!(phase = ?self.phase, "retry ignored");
            return None;
        }
        info!(start_line = %self.current_page_start, "Retrying fetch");
        let log_id = self.selected.as_ref()?.id().clone();
        Some(self.issue(log_id))
    }

    /// Fold a completion into state.
    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) -> CompletionOutcome {
        let FetchCompletion { request, result } = completion;
        match result {
            Ok(page) => self.on_fetch_success(&request, page),
            Err(err) => self.on_fetch_failure(&request, err),
        }
    }

    /// Append (or, right after a reset, fill) the window with `page`.
    pub fn on_fetch_success(&mut self, request: &FetchRequest, page: LinePage) -> CompletionOutcome {
        if !self.accepts(request) {
            return CompletionOutcome::Stale;
        }
        self.in_flight = None;

        let received = page.len() as u64;
        let is_short = page.is_short() || received < request.count;

        if let Err(err) = self.window.append(request.start_line, page.into_lines()) {
            error!(error = %err, "Dropping page that does not fit the window");
            self.phase = Phase::Failed;
            self.last_error = Some(ContentFetchError::Malformed(err.to_string()));
            return CompletionOutcome::Failed;
        }

        self.current_page_start = self.window.next_line_number();
        self.has_more = !is_short;
        self.phase = if self.has_more {
            Phase::Ready
        } else {
            Phase::Exhausted
        };

        debug!(
            start_line = %request.start_line,
            received,
            is_short,
            next = %self.current_page_start,
            "Applied page"
        );
        CompletionOutcome::Applied
    }

    /// Record a failed fetch, keeping the window and `current_page_start`.
    pub fn on_fetch_failure(
        &mut self,
        request: &FetchRequest,
        err: ContentFetchError,
    ) -> CompletionOutcome {
        if !self.accepts(request) {
            return CompletionOutcome::Stale;
        }
        self.in_flight = None;

        warn!(start_line = %request.start_line, error = %err, "Fetch failed");
        self.phase = Phase::Failed;
        self.last_error = Some(err);
        CompletionOutcome::Failed
    }

    // ===== Internals =====

    fn start_window(&mut self, log_id: LogId, start: LineNumber) -> FetchRequest {
        self.generation = self.generation.next();
        self.window.reset(start);
        self.current_page_start = start;
        self.has_more = true;
        self.issue(log_id)
    }

    /// Build the next request for `log_id` and move to `Loading`.
    fn issue(&mut self, log_id: LogId) -> FetchRequest {
        let request = FetchRequest {
            log_id,
            start_line: self.current_page_start,
            count: self.page_size.get(),
            generation: self.generation,
        };
        self.phase = Phase::Loading;
        self.last_error = None;
        self.in_flight = Some(request.clone());
        request
    }

    fn accepts(&self, request: &FetchRequest) -> bool {
        let matches = self.phase == Phase::Loading && self.in_flight.as_ref() == Some(request);
        if !matches {
            warn!(
                generation = %request.generation,
                current = %self.generation,
                log_id = %request.log_id,
                start_line = %request.start_line,
                "Discarding stale fetch result"
            );
        }
        matches
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
