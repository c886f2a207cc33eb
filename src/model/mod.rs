//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod fetch;
pub mod identifiers;
pub mod key_action;
pub mod log_file;

// Re-export for convenience
pub use error::{AppError, CatalogFetchError, ContentFetchError, InvalidJumpTarget};
pub use fetch::{FetchCompletion, FetchRequest, Generation, LinePage};
pub use identifiers::{InvalidLogId, InvalidPageSize, LineNumber, LogId, PageSize};
pub use key_action::KeyAction;
pub use log_file::{friendly_name, LogFile};
