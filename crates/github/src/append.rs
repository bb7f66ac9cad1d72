//! Append-only file sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use forms::{RecordSink, SinkError};

/// A [`RecordSink`] backed by a file on disk.
///
/// The file is created if missing, but its parent directory is not. Every
/// append opens the file in append mode and issues a single `write_all`;
/// existing bytes are never read or rewritten. There is no locking between
/// concurrent processes.
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    /// Creates a sink for `path`. Nothing is opened until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for AppendFile {
    fn append(&mut self, content: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::with_source(self.describe(), e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| SinkError::with_source(self.describe(), e))?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "Appended to file");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_existing_content() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("README.md");
        std::fs::write(&path, "# Orders\n").expect("seed file");

        let mut sink = AppendFile::new(&path);
        sink.append("1. first\n").expect("first append");
        sink.append("1. second\n").expect("second append");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "# Orders\n1. first\n1. second\n");
    }

    #[test]
    fn append_creates_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("new.yml");

        AppendFile::new(&path).append("x\n").expect("append");

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "x\n");
    }

    #[test]
    fn missing_parent_directory_fails_without_creating_it() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("_data").join("collection-index.yml");

        let err = AppendFile::new(&path).append("x\n").expect_err("no _data dir");

        assert!(err.target.contains("collection-index.yml"));
        assert!(!dir.path().join("_data").exists());
    }
}
