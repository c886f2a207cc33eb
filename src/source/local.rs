//! Local directory log source.
//!
//! Browses a directory of log files without a log service: every regular file in
//! the directory is one catalog entry, and line ranges are read straight from disk.

use crate::model::{
    friendly_name, CatalogFetchError, ContentFetchError, LineNumber, LinePage, LogFile, LogId,
};
use crate::source::{CatalogSource, LineRangeClient};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

/// A directory whose files are served as logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalLogDirectory {
    root: PathBuf,
}

impl LocalLogDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a log id to a file inside `root`.
    ///
    /// Only a single plain filename is accepted, so ids cannot escape the directory.
    fn resolve(&self, log_id: &LogId) -> Result<PathBuf, ContentFetchError> {
        let mut components = Path::new(log_id.as_str()).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.root.join(name)),
            _ => Err(ContentFetchError::NotFound(log_id.clone())),
        }
    }
}

impl CatalogSource for LocalLogDirectory {
    fn list_logs(&self) -> Result<Vec<LogFile>, CatalogFetchError> {
        if !self.root.is_dir() {
            return Err(CatalogFetchError::DirectoryNotFound(self.root.clone()));
        }

        let io_err = |e: std::io::Error| CatalogFetchError::Io(e.to_string());
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.root).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let metadata = entry.metadata().map_err(io_err)?;
            if !metadata.is_file() {
                continue;
            }

            // Non-UTF-8 filenames cannot round-trip through a LogId
            let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let Ok(id) = LogId::new(filename.clone()) else {
                continue;
            };

            let modified_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_default();

            files.push(LogFile::new(
                friendly_name(&filename),
                id,
                metadata.len(),
                modified_at,
            ));
        }

        files.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(files)
    }
}

impl LineRangeClient for LocalLogDirectory {
    fn fetch_lines(
        &self,
        log_id: &LogId,
        start_line: LineNumber,
        count: u64,
    ) -> Result<LinePage, ContentFetchError> {
        let path = self.resolve(log_id)?;
        if !path.is_file() {
            return Err(ContentFetchError::NotFound(log_id.clone()));
        }

        let file = File::open(&path).map_err(|e| ContentFetchError::Io(e.to_string()))?;
        let skip = usize::try_from(start_line.get() - 1).unwrap_or(usize::MAX);
        let take = usize::try_from(count).unwrap_or(usize::MAX);

        let lines = BufReader::new(file)
            .lines()
            .skip(skip)
            .take(take)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::InvalidData {
                    ContentFetchError::Malformed(e.to_string())
                } else {
                    ContentFetchError::Io(e.to_string())
                }
            })?;

        Ok(LinePage::new(lines, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // ===== Test Helpers =====

    fn make_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn numbered_lines(n: usize) -> String {
        (1..=n).map(|i| format!("line {}\n", i)).collect()
    }

    fn id(raw: &str) -> LogId {
        LogId::new(raw).unwrap()
    }

    fn line(n: u64) -> LineNumber {
        LineNumber::new(n).unwrap()
    }

    // ===== list_logs =====

    #[test]
    fn list_logs_missing_directory_is_error() {
        let dir = std::env::temp_dir().join("rlv_local_missing_dir_12345");
        let _ = fs::remove_dir_all(&dir);

        let result = LocalLogDirectory::new(&dir).list_logs();

        assert_eq!(result, Err(CatalogFetchError::DirectoryNotFound(dir)));
    }

    #[test]
    fn list_logs_returns_files_with_friendly_names() {
        let dir = make_dir("rlv_local_list_files");
        fs::write(dir.join("nightly_build.log"), "a\nb\n").unwrap();
        fs::write(dir.join("api_deploy.txt"), "x\n").unwrap();
        fs::create_dir_all(dir.join("archive")).unwrap();

        let files = LocalLogDirectory::new(&dir).list_logs().unwrap();
        let _ = fs::remove_dir_all(&dir);

        let names: Vec<_> = files.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Api Deploy", "Nightly Build"], "sorted, dirs skipped");
        assert_eq!(files[1].id().as_str(), "nightly_build.log");
        assert_eq!(files[1].size_bytes(), 4);
    }

    // ===== fetch_lines =====

    #[test]
    fn fetch_first_page_is_full() {
        let dir = make_dir("rlv_local_fetch_first");
        fs::write(dir.join("big.log"), numbered_lines(250)).unwrap();

        let page = LocalLogDirectory::new(&dir)
            .fetch_lines(&id("big.log"), line(1), 100)
            .unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(page.len(), 100);
        assert!(!page.is_short());
        assert_eq!(page.lines()[0], "line 1");
        assert_eq!(page.lines()[99], "line 100");
    }

    #[test]
    fn fetch_last_page_is_short() {
        let dir = make_dir("rlv_local_fetch_last");
        fs::write(dir.join("big.log"), numbered_lines(250)).unwrap();

        let page = LocalLogDirectory::new(&dir)
            .fetch_lines(&id("big.log"), line(201), 100)
            .unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(page.len(), 50);
        assert!(page.is_short());
        assert_eq!(page.lines()[0], "line 201");
    }

    #[test]
    fn fetch_past_end_is_empty_and_short() {
        let dir = make_dir("rlv_local_fetch_past_end");
        fs::write(dir.join("small.log"), numbered_lines(3)).unwrap();

        let page = LocalLogDirectory::new(&dir)
            .fetch_lines(&id("small.log"), line(101), 100)
            .unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert!(page.is_empty());
        assert!(page.is_short());
    }

    #[test]
    fn fetch_missing_file_is_not_found() {
        let dir = make_dir("rlv_local_fetch_missing");
        let result = LocalLogDirectory::new(&dir).fetch_lines(&id("nope.log"), line(1), 10);
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(result, Err(ContentFetchError::NotFound(id("nope.log"))));
    }

    #[test]
    fn fetch_rejects_ids_escaping_root() {
        let dir = LocalLogDirectory::new("/tmp/rlv_never_read");
        for raw in ["../etc/passwd", "sub/file.log", "..", "/etc/passwd"] {
            let result = dir.fetch_lines(&id(raw), line(1), 10);
            assert!(
                matches!(result, Err(ContentFetchError::NotFound(_))),
                "{} should be rejected, got {:?}",
                raw,
                result
            );
        }
    }
}
