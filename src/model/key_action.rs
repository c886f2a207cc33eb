//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll content up by one line. Default: k/↑
    ScrollUp,
    /// Scroll content down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first buffered line. Default: g/Home
    ScrollToTop,
    /// Jump to the last buffered line. Default: G/End
    ScrollToBottom,

    // Catalog
    /// Move catalog cursor up. Default: k/↑ (catalog focus)
    PrevLog,
    /// Move catalog cursor down. Default: j/↓ (catalog focus)
    NextLog,
    /// Open the log under the catalog cursor. Default: Enter
    SelectLog,
    /// Re-fetch the log catalog. Default: R
    ReloadCatalog,

    // Pagination
    /// Open the go-to-line input. Default: : or Ctrl+g
    StartJump,
    /// Re-issue the failed fetch. Default: r
    Retry,

    // Focus
    /// Toggle focus between catalog and content. Default: Tab
    ToggleFocus,

    // Application
    /// Quit. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action scrolls the content pane.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
