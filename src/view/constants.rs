//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
///
/// Shows the source, the selected log and the go-to-line input.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the catalog pane as a percentage of the screen.
pub const CATALOG_WIDTH_PERCENT: u16 = 32;

/// Rows and columns taken by a bordered block (one on each side).
pub const BORDER_SIZE: u16 = 2;

/// Separator between the line-number gutter and the line text.
pub const GUTTER_SEPARATOR: &str = " │ ";

/// Placeholder shown in the content pane before a log is chosen.
pub const SELECT_LOG_PLACEHOLDER: &str = "Select a log to view its content";

/// Placeholder shown when a finished window holds no lines.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content to display";
