//! Log data sources.
//!
//! This module provides the collaborators the pagination controller consumes:
//! - [`LineRangeClient`]: fetch a bounded line range of one log
//! - [`CatalogSource`]: list the available logs
//! - HTTP and local-directory implementations of both
//! - [`FetchWorker`] to run fetches off the UI thread

use crate::model::{CatalogFetchError, ContentFetchError, LineNumber, LinePage, LogFile, LogId};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod http;
pub mod local;
pub mod worker;

pub use http::{parse_line_body, HttpLogService, InvalidServerUrl};
pub use local::LocalLogDirectory;
pub use worker::{fetch_blocking, FetchWorker};

/// Fetches a range of lines from one log.
///
/// Implementations return at most `count` lines starting at `start_line`.
/// Fewer lines than requested (including none) means end of file.
pub trait LineRangeClient: Send + Sync {
    fn fetch_lines(
        &self,
        log_id: &LogId,
        start_line: LineNumber,
        count: u64,
    ) -> Result<LinePage, ContentFetchError>;
}

/// Lists log files available for browsing.
pub trait CatalogSource: Send + Sync {
    fn list_logs(&self) -> Result<Vec<LogFile>, CatalogFetchError>;
}

/// Where logs come from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum LogBackend {
    /// Remote log service speaking the `/logs` HTTP API.
    Http(HttpLogService),
    /// Directory on the local filesystem.
    Local(LocalLogDirectory),
}

impl LogBackend {
    /// Catalog half of the backend.
    pub fn catalog(&self) -> Arc<dyn CatalogSource> {
        match self {
            LogBackend::Http(service) => Arc::new(service.clone()),
            LogBackend::Local(dir) => Arc::new(dir.clone()),
        }
    }

    /// Content half of the backend, shareable with fetch threads.
    pub fn content_client(&self) -> Arc<dyn LineRangeClient> {
        match self {
            LogBackend::Http(service) => Arc::new(service.clone()),
            LogBackend::Local(dir) => Arc::new(dir.clone()),
        }
    }

    /// Short human description for the header bar.
    pub fn describe(&self) -> String {
        match self {
            LogBackend::Http(service) => service.base_url().to_string(),
            LogBackend::Local(dir) => dir.root().display().to_string(),
        }
    }
}

/// Pick the backend.
///
/// # Logic:
/// 1. If a logs directory is given: browse it locally
/// 2. Else: talk to the log service at `server_url`
///
/// # Errors
///
/// Returns `InvalidServerUrl` if the server URL cannot be used as a base URL.
pub fn detect_backend(
    server_url: &str,
    logs_dir: Option<PathBuf>,
    timeout: Duration,
) -> Result<LogBackend, InvalidServerUrl> {
    match logs_dir {
        Some(root) => Ok(LogBackend::Local(LocalLogDirectory::new(root))),
        None => Ok(LogBackend::Http(HttpLogService::new(server_url, timeout)?)),
    }
}
