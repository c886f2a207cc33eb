//! TUI rendering and terminal management (impure shell)

pub mod catalog_list;
pub mod constants;
pub mod layout;
pub mod log_pane;
pub mod status_bar;
pub mod styles;

pub use styles::{ColorConfig, ViewStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{
    CatalogFetchError, FetchRequest, KeyAction, LineNumber, LogFile, LogId, PageSize,
};
use crate::source::{CatalogSource, FetchWorker, LineRangeClient, LogBackend};
use crate::state::{scroll_handler, AppState, FocusPane, JumpInput, Phase};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

type CatalogResult = Result<Vec<LogFile>, CatalogFetchError>;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// What to open once the catalog arrives, and how to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Log to select as soon as it appears in the catalog.
    pub log: Option<LogId>,
    /// Line to jump to in that log.
    pub line: Option<LineNumber>,
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ViewStyles,
    catalog_source: Arc<dyn CatalogSource>,
    /// Pending catalog fetch, if one is running.
    catalog_rx: Option<Receiver<CatalogResult>>,
    worker: FetchWorker,
    /// Log (and line) requested at startup, opened when the catalog lands.
    pending_open: Option<(LogId, Option<LineNumber>)>,
    /// Content rows visible in the last drawn frame.
    viewport_height: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        backend: &LogBackend,
        page_size: PageSize,
        options: StartupOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            backend.catalog(),
            backend.content_client(),
            AppState::new(page_size, backend.describe()),
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Short tick so background fetches show up promptly
        const TICK: Duration = Duration::from_millis(50);

        loop {
            self.poll_background();
            self.draw()?;

            if event::poll(TICK)? {
                // Resize needs no handling: the next draw picks up the new size
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal and start loading the catalog.
    pub fn with_terminal(
        terminal: Terminal<B>,
        catalog_source: Arc<dyn CatalogSource>,
        content: Arc<dyn LineRangeClient>,
        app_state: AppState,
        options: StartupOptions,
    ) -> Self {
        let pending_open = options.log.map(|id| (id, options.line));
        let mut app = Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ViewStyles::new(options.colors),
            catalog_source,
            catalog_rx: None,
            worker: FetchWorker::new(content),
            pending_open,
            viewport_height: 0,
        };
        app.reload_catalog();
        app
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Fetch the catalog on a background thread.
    ///
    /// The current list stays on screen until the new one arrives.
    fn reload_catalog(&mut self) {
        let source = Arc::clone(&self.catalog_source);
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("rlv-catalog".to_string())
            .spawn(move || {
                let _ = tx.send(source.list_logs());
            });

        match spawned {
            Ok(_) => self.catalog_rx = Some(rx),
            Err(e) => {
                warn!(error = %e, "Failed to spawn catalog thread");
                self.on_catalog(Err(CatalogFetchError::Io(e.to_string())));
            }
        }
    }

    fn on_catalog(&mut self, result: CatalogResult) {
        let loaded = match &result {
            Ok(files) => {
                info!(count = files.len(), "Catalog loaded");
                true
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                false
            }
        };
        self.app_state.apply_catalog(result);

        // A startup log waits for the first catalog that actually loads
        if loaded {
            if let Some((id, line)) = self.pending_open.take() {
                self.open_log(&id, line);
            }
        }
    }

    /// Select `id` and optionally jump, issuing a single fetch.
    fn open_log(&mut self, id: &LogId, line: Option<LineNumber>) {
        let Some(first_page) = self.app_state.select_log_by_id(id) else {
            warn!(log_id = %id, "Requested log is not in the catalog");
            return;
        };
        // A jump supersedes the first page before it was ever sent
        let request = match line {
            Some(line) => self.app_state.jump_to_line(line),
            None => Some(first_page),
        };
        self.submit(request);
    }

    fn submit(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.worker.submit(request);
        }
    }

    /// Fold in whatever the background threads have produced.
    fn poll_background(&mut self) {
        let received = self.catalog_rx.as_ref().map(|rx| rx.try_recv());
        match received {
            Some(Ok(result)) => {
                self.catalog_rx = None;
                self.on_catalog(result);
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.catalog_rx = None;
                self.on_catalog(Err(CatalogFetchError::Io(
                    "catalog thread exited without a result".to_string(),
                )));
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }

        for completion in self.worker.drain() {
            let outcome = self.app_state.apply_completion(completion);
            debug!(?outcome, "Fetch completion");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a line number
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.jump.is_active() {
            self.handle_jump_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match route_for_focus(self.app_state.focus, action) {
            KeyAction::Quit => return true,
            KeyAction::NextLog => self.app_state.catalog.next(),
            KeyAction::PrevLog => self.app_state.catalog.prev(),
            KeyAction::SelectLog => {
                if self.app_state.focus == FocusPane::Catalog {
                    let request = self.app_state.select_highlighted();
                    self.submit(request);
                }
            }
            KeyAction::ReloadCatalog => self.reload_catalog(),
            KeyAction::StartJump => {
                if self.app_state.pagination.phase() != Phase::Idle {
                    self.app_state.jump = JumpInput::open();
                }
            }
            KeyAction::Retry => {
                let request = self.app_state.retry();
                self.submit(request);
            }
            KeyAction::ToggleFocus => self.app_state.toggle_focus(),
            scroll => {
                scroll_handler::handle_scroll_action(
                    &mut self.app_state,
                    scroll,
                    self.viewport_height,
                );
                self.check_sentinel();
            }
        }

        false
    }

    fn handle_jump_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.app_state.jump = JumpInput::Inactive,
            KeyCode::Enter => {
                let request = self.app_state.submit_jump();
                self.submit(request);
            }
            KeyCode::Backspace => {
                self.app_state.jump = std::mem::take(&mut self.app_state.jump).backspace();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.jump = std::mem::take(&mut self.app_state.jump).push_char(ch);
            }
            _ => {}
        }
    }

    fn check_sentinel(&mut self) {
        let request = self.app_state.check_sentinel(self.viewport_height);
        self.submit(request);
    }

    /// Render the current frame, then let the sentinel see what is on screen.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.viewport_height =
            layout::content_viewport_height(Rect::new(0, 0, size.width, size.height));

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        self.check_sentinel();
        Ok(())
    }
}

/// With the catalog focused, line movement keys move the catalog cursor.
fn route_for_focus(focus: FocusPane, action: KeyAction) -> KeyAction {
    match (focus, action) {
        (FocusPane::Catalog, KeyAction::ScrollDown) => KeyAction::NextLog,
        (FocusPane::Catalog, KeyAction::ScrollUp) => KeyAction::PrevLog,
        (_, action) => action,
    }
}

/// Initialize and run the TUI application against a log backend.
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_backend(
    backend: &LogBackend,
    page_size: PageSize,
    options: StartupOptions,
) -> Result<(), TuiError> {
    info!(source = %backend.describe(), page_size = %page_size, "Starting TUI");
    let mut app = TuiApp::new(backend, page_size, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
