//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod catalog;
pub mod jump_input;
pub mod page;
pub mod pagination;
pub mod scroll_handler;
pub mod sentinel;
pub mod window;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use catalog::CatalogState;
pub use jump_input::JumpInput;
pub use page::resolve_jump;
pub use pagination::{CompletionOutcome, PaginationController, PaginationSnapshot, Phase};
pub use scroll_handler::handle_scroll_action;
pub use sentinel::{Anchor, ScrollSentinel};
pub use window::{WindowBuffer, WindowError};
