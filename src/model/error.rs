//! Error types for rlv.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`CatalogFetchError`] - The log listing could not be retrieved
//!   - [`ContentFetchError`] - A page of log lines could not be retrieved
//!   - [`crate::config::ConfigError`] - Config file could not be read or parsed
//!   - [`crate::logging::LoggingError`] - Tracing subscriber setup failed
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! [`InvalidJumpTarget`] is deliberately not part of `AppError`: it is produced while
//! editing the go-to-line input and is rejected before any controller state changes.
//!
//! # Error Recovery Strategy
//!
//! Content errors are **non-fatal**: the pagination controller moves to `Failed`,
//! keeps the lines it already had, and the user can retry. Catalog errors are shown
//! in the log list and can be retried with a reload. Only terminal errors end the
//! process.

use crate::model::LogId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The log catalog could not be loaded.
    #[error("Failed to load log catalog: {0}")]
    Catalog(#[from] CatalogFetchError),

    /// A page of content could not be loaded.
    #[error("Failed to load log content: {0}")]
    Content(#[from] ContentFetchError),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function; this is fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while listing available log files.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogFetchError {
    /// Network-level failure (connection refused, DNS, timeout).
    #[error("Catalog service unreachable: {0}")]
    Transport(String),

    /// Catalog service answered with a non-success status.
    #[error("Catalog service returned HTTP {code}")]
    Status {
        /// HTTP status code.
        code: u16,
    },

    /// Response body was not the expected JSON document.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),

    /// The service reported an error in the `error` field of its response.
    #[error("{0}")]
    Service(String),

    /// Local logs directory does not exist.
    #[error("{} directory not found", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Local I/O failure while listing a directory.
    #[error("Failed to list logs: {0}")]
    Io(String),
}

/// Errors encountered while fetching a line range.
///
/// `Clone` because the pagination controller keeps the last error in its state
/// for display until the next fetch is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentFetchError {
    /// Network-level failure (connection refused, DNS, timeout).
    #[error("Content service unreachable: {0}")]
    Transport(String),

    /// Content service answered with a non-success status.
    #[error("Failed to fetch log content (HTTP {code}): {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body text, as returned by the service.
        body: String,
    },

    /// Body was not valid UTF-8 or held more lines than requested.
    #[error("Malformed content response: {0}")]
    Malformed(String),

    /// No log with this identifier exists.
    #[error("Log not found: {0}")]
    NotFound(LogId),

    /// Local I/O failure while reading a log file.
    #[error("Failed to read log: {0}")]
    Io(String),
}

/// Rejected go-to-line input. Never reaches the pagination controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidJumpTarget {
    /// Nothing was typed.
    #[error("Enter a line number")]
    Empty,

    /// Input was not a base-10 integer.
    #[error("Not a line number: {0:?}")]
    NotANumber(String),

    /// Zero or negative line number.
    #[error("Line numbers start at 1")]
    NotPositive,
}
