//! Fetch requests, their results, and the generation tag that links them.

use crate::model::{ContentFetchError, LineNumber, LogId};
use std::fmt;

/// Window generation counter.
///
/// Bumped on every log switch or jump. A completion whose generation does not
/// match the controller's current one belongs to a window that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// A single line-range request, stamped with the generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub log_id: LogId,
    pub start_line: LineNumber,
    pub count: u64,
    pub generation: Generation,
}

/// Lines returned by one fetch.
///
/// `is_short` is true when fewer lines than requested came back, including zero.
/// A short page means end of file was reached inside the requested range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePage {
    lines: Vec<String>,
    is_short: bool,
}

impl LinePage {
    /// Build a page, deriving `is_short` from the requested count.
    pub fn new(lines: Vec<String>, requested: u64) -> Self {
        let is_short = (lines.len() as u64) < requested;
        Self { lines, is_short }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_short(&self) -> bool {
        self.is_short
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Outcome of a fetch, delivered back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub result: Result<LinePage, ContentFetchError>,
}
