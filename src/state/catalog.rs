//! Log catalog list state: the files on offer and the highlighted row.

use crate::model::{CatalogFetchError, LogFile, LogId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    /// Catalog has not been fetched yet.
    #[default]
    Loading,
    /// Catalog fetched. `cursor` indexes `files` and is 0 when `files` is empty.
    Loaded { files: Vec<LogFile>, cursor: usize },
    /// Catalog could not be fetched.
    Failed(CatalogFetchError),
}

impl CatalogState {
    /// Install a fetch result.
    ///
    /// On reload the cursor stays on the same log if it is still listed.
    pub fn apply(&mut self, result: Result<Vec<LogFile>, CatalogFetchError>) {
        let previous = self.highlighted().map(|f| f.id().clone());
        *self = match result {
            Ok(files) => {
                let cursor = previous
                    .and_then(|id| files.iter().position(|f| *f.id() == id))
                    .unwrap_or(0);
                CatalogState::Loaded { files, cursor }
            }
            Err(err) => CatalogState::Failed(err),
        };
    }

    pub fn files(&self) -> &[LogFile] {
        match self {
            CatalogState::Loaded { files, .. } => files,
            _ => &[],
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            CatalogState::Loaded { files, cursor } if !files.is_empty() => Some(*cursor),
            _ => None,
        }
    }

    pub fn highlighted(&self) -> Option<&LogFile> {
        self.cursor().and_then(|i| self.files().get(i))
    }

    pub fn error(&self) -> Option<&CatalogFetchError> {
        match self {
            CatalogState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn find(&self, id: &LogId) -> Option<&LogFile> {
        self.files().iter().find(|f| f.id() == id)
    }

    /// Move the cursor down, stopping at the last row.
    pub fn next(&mut self) {
        if let CatalogState::Loaded { files, cursor } = self {
            if *cursor + 1 < files.len() {
                *cursor += 1;
            }
        }
    }

    /// Move the cursor up, stopping at the first row.
    pub fn prev(&mut self) {
        if let CatalogState::Loaded { cursor, .. } = self {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Point the cursor at `id` if listed.
    pub fn highlight(&mut self, id: &LogId) {
        if let CatalogState::Loaded { files, cursor } = self {
            if let Some(i) = files.iter().position(|f| f.id() == id) {
                *cursor = i;
            }
        }
    }
}
