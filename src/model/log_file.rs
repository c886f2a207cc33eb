//! Catalog records describing available log files.

use crate::model::LogId;
use chrono::{DateTime, Utc};

/// One entry of the log catalog.
///
/// Immutable once received from a [`crate::source::CatalogSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    name: String,
    id: LogId,
    size_bytes: u64,
    modified_at: DateTime<Utc>,
}

impl LogFile {
    pub fn new(
        name: impl Into<String>,
        id: LogId,
        size_bytes: u64,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            size_bytes,
            modified_at,
        }
    }

    /// Human-friendly display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier passed to the content service.
    pub fn id(&self) -> &LogId {
        &self.id
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Size formatted as kilobytes with two decimals ("12.50 KB").
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Convert a filename into a display name.
///
/// Drops the extension, turns underscores into spaces and capitalizes each word:
/// `build_log_march_20.log` becomes `Build Log March 20`.
pub fn friendly_name(filename: &str) -> String {
    let stem = std::path::Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    stem.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
