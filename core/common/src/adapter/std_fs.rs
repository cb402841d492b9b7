//! std::fs による FileSystem 実装

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

/// "Failed to <action> '<path>': <cause>"
fn io_error(action: &str, path: &Path, e: std::io::Error) -> Error {
    Error::io_msg(format!("Failed to {} '{}': {}", action, path.display(), e))
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        fs::read_to_string(path).map_err(|e| io_error("read", path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        fs::write(path, contents).map_err(|e| io_error("write", path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        fs::rename(from, to).map_err(|e| io_error(&format!("move '{}' to", from.display()), to, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path).map_err(|e| io_error("create directory", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error("open for append", path, e))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("storage.json");
        assert!(!StdFileSystem.exists(&path));
        StdFileSystem.write(&path, "{}").unwrap();
        assert!(StdFileSystem.exists(&path));
        assert_eq!(StdFileSystem.read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_missing_names_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = StdFileSystem
            .read_to_string(&tmp.path().join("missing.json"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read '"));
        assert!(err.to_string().contains("missing.json"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_rename_replaces_target() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("a.tmp");
        let to = tmp.path().join("a.json");
        StdFileSystem.write(&to, "old").unwrap();
        StdFileSystem.write(&from, "new").unwrap();
        StdFileSystem.rename(&from, &to).unwrap();
        assert_eq!(StdFileSystem.read_to_string(&to).unwrap(), "new");
        assert!(!StdFileSystem.exists(&from));
    }

    #[test]
    fn test_open_append_keeps_existing_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ytmemo.jsonl");
        for line in ["one\n", "two\n"] {
            let mut w = StdFileSystem.open_append(&path).unwrap();
            w.write_all(line.as_bytes()).unwrap();
        }
        assert_eq!(StdFileSystem.read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
