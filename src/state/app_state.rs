//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions that
//! need a fetch return the [`FetchRequest`] for the shell to run; nothing here
//! performs I/O.

use crate::model::{
    CatalogFetchError, FetchCompletion, FetchRequest, LineNumber, LogFile, LogId, PageSize,
};
use crate::state::catalog::CatalogState;
use crate::state::jump_input::JumpInput;
use crate::state::pagination::{CompletionOutcome, PaginationController};
use crate::state::sentinel::ScrollSentinel;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Log list on the left.
    #[default]
    Catalog,
    /// Line buffer on the right.
    Content,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Available logs and the highlighted row.
    pub catalog: CatalogState,

    /// Window and fetch protocol for the selected log.
    pub pagination: PaginationController,

    /// Bottom-of-window observer driving incremental loads.
    pub sentinel: ScrollSentinel,

    /// Go-to-line editor.
    pub jump: JumpInput,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Index into the window of the first visible line.
    pub scroll_offset: usize,

    /// Where logs are coming from, for the header bar.
    pub source_label: String,
}

impl AppState {
    pub fn new(page_size: PageSize, source_label: impl Into<String>) -> Self {
        Self {
            catalog: CatalogState::default(),
            pagination: PaginationController::new(page_size),
            sentinel: ScrollSentinel::new(),
            jump: JumpInput::Inactive,
            focus: FocusPane::Catalog,
            scroll_offset: 0,
            source_label: source_label.into(),
        }
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<LogFile>, CatalogFetchError>) {
        self.catalog.apply(result);
    }

    /// Open the log under the catalog cursor.
    pub fn select_highlighted(&mut self) -> Option<FetchRequest> {
        let log = self.catalog.highlighted()?.clone();
        Some(self.select_log(log))
    }

    /// Open the catalog entry with `id`, if listed.
    pub fn select_log_by_id(&mut self, id: &LogId) -> Option<FetchRequest> {
        let log = self.catalog.find(id)?.clone();
        self.catalog.highlight(id);
        Some(self.select_log(log))
    }

    fn select_log(&mut self, log: LogFile) -> FetchRequest {
        let request = self.pagination.select_log(log);
        self.after_reset();
        self.focus = FocusPane::Content;
        request
    }

    /// Submit the go-to-line editor.
    ///
    /// Invalid input leaves the editor open with an error and issues nothing.
    pub fn submit_jump(&mut self) -> Option<FetchRequest> {
        let (jump, line) = std::mem::take(&mut self.jump).submit();
        self.jump = jump;
        self.jump_to_line(line?)
    }

    pub fn jump_to_line(&mut self, line: LineNumber) -> Option<FetchRequest> {
        let request = self.pagination.jump_to_line(line)?;
        self.after_reset();
        Some(request)
    }

    pub fn retry(&mut self) -> Option<FetchRequest> {
        self.pagination.retry()
    }

    /// Fold a fetch completion into the controller and re-attach the sentinel.
    pub fn apply_completion(&mut self, completion: FetchCompletion) -> CompletionOutcome {
        let outcome = self.pagination.on_fetch_complete(completion);
        self.sentinel.sync(&self.pagination);
        outcome
    }

    /// Fire the sentinel if the last buffered line is inside the viewport.
    pub fn check_sentinel(&mut self, viewport_height: usize) -> Option<FetchRequest> {
        let window = self.pagination.window();
        let last_index = window.len().checked_sub(1)?;
        let visible = self.scroll_offset..self.scroll_offset.saturating_add(viewport_height);
        if !visible.contains(&last_index) {
            return None;
        }
        let last_line = window.last_line_number()?;
        let request = self.sentinel.on_visible(last_line, &mut self.pagination);
        self.sentinel.sync(&self.pagination);
        request
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Catalog => FocusPane::Content,
            FocusPane::Content => FocusPane::Catalog,
        };
    }

    fn after_reset(&mut self) {
        self.scroll_offset = 0;
        self.sentinel.sync(&self.pagination);
    }
}
