//! HTTP client for the remote log service.
//!
//! Speaks two endpoints:
//! - `GET {base}/logs` - JSON catalog `{"files": [...], "error": "..."}`
//! - `GET {base}/logs/{filename}?start_line=S&num_lines=N` - newline-delimited text

use crate::model::{
    friendly_name, CatalogFetchError, ContentFetchError, LineNumber, LinePage, LogFile, LogId,
};
use crate::source::{CatalogSource, LineRangeClient};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// The configured server URL cannot serve as a base for API paths.
#[derive(Debug, Error)]
pub enum InvalidServerUrl {
    #[error("Invalid server URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Server URL cannot be used as a base: {0}")]
    NotABase(String),
}

/// Blocking client for the log service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpLogService {
    base_url: Url,
    agent: ureq::Agent,
}

impl HttpLogService {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InvalidServerUrl> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(InvalidServerUrl::NotABase(base_url.to_string()));
        }
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Ok(Self { base_url, agent })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/logs`
    pub fn catalog_url(&self) -> Url {
        self.endpoint(&[])
    }

    /// `{base}/logs/{id}?start_line=S&num_lines=N`, with `id` percent-encoded.
    pub fn content_url(&self, log_id: &LogId, start_line: LineNumber, count: u64) -> Url {
        let mut url = self.endpoint(&[log_id.as_str()]);
        url.query_pairs_mut()
            .append_pair("start_line", &start_line.to_string())
            .append_pair("num_lines", &count.to_string());
        url
    }

    fn endpoint(&self, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs were rejected in new(), so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("logs").extend(extra);
        }
        url
    }
}

impl LineRangeClient for HttpLogService {
    fn fetch_lines(
        &self,
        log_id: &LogId,
        start_line: LineNumber,
        count: u64,
    ) -> Result<LinePage, ContentFetchError> {
        let url = self.content_url(log_id, start_line, count);
        debug!(%url, "Fetching line range");

        let response = self.agent.get(url.as_str()).call().map_err(|err| match err {
            ureq::Error::Status(code, response) => ContentFetchError::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => {
                ContentFetchError::Transport(transport.to_string())
            }
        })?;

        let body = response.into_string().map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                ContentFetchError::Malformed(e.to_string())
            } else {
                ContentFetchError::Transport(e.to_string())
            }
        })?;

        parse_line_body(&body, count)
    }
}

/// One catalog entry as serialized by the log service.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    name: Option<String>,
    filename: String,
    size: u64,
    /// Unix timestamp in (fractional) seconds.
    modified: f64,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    files: Vec<CatalogEntry>,
    #[serde(default)]
    error: Option<String>,
}

impl CatalogSource for HttpLogService {
    fn list_logs(&self) -> Result<Vec<LogFile>, CatalogFetchError> {
        let url = self.catalog_url();
        debug!(%url, "Fetching catalog");

        let response = self.agent.get(url.as_str()).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => CatalogFetchError::Status { code },
            ureq::Error::Transport(transport) => {
                CatalogFetchError::Transport(transport.to_string())
            }
        })?;

        let body = response
            .into_string()
            .map_err(|e| CatalogFetchError::Malformed(e.to_string()))?;

        parse_catalog_body(&body)
    }
}

/// Decode the catalog JSON document.
///
/// A non-empty `error` field fails the whole catalog.
pub fn parse_catalog_body(body: &str) -> Result<Vec<LogFile>, CatalogFetchError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| CatalogFetchError::Malformed(e.to_string()))?;

    if let Some(message) = response.error.filter(|m| !m.is_empty()) {
        return Err(CatalogFetchError::Service(message));
    }

    response
        .files
        .into_iter()
        .map(|entry| {
            let id = LogId::new(entry.filename.clone())
                .map_err(|e| CatalogFetchError::Malformed(e.to_string()))?;
            let modified_at = timestamp_from_secs(entry.modified).ok_or_else(|| {
                CatalogFetchError::Malformed(format!(
                    "modified time out of range for {}: {}",
                    entry.filename, entry.modified
                ))
            })?;
            let name = entry
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| friendly_name(&entry.filename));
            Ok(LogFile::new(name, id, entry.size, modified_at))
        })
        .collect()
}

fn timestamp_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
}

/// Split a content response body into a page of lines.
///
/// - Empty body: zero lines
/// - One trailing `\n` terminates the last line; it does not add an empty one
/// - A trailing `\r` on each line is dropped
///
/// # Errors
///
/// Returns `ContentFetchError::Malformed` when the body carries more lines than requested.
pub fn parse_line_body(body: &str, count: u64) -> Result<LinePage, ContentFetchError> {
    if body.is_empty() {
        return Ok(LinePage::new(Vec::new(), count));
    }

    let body = body.strip_suffix('\n').unwrap_or(body);
    let lines: Vec<String> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();

    if lines.len() as u64 > count {
        return Err(ContentFetchError::Malformed(format!(
            "requested {} lines, received {}",
            count,
            lines.len()
        )));
    }

    Ok(LinePage::new(lines, count))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
