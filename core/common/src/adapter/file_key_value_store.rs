//! JSON オブジェクト 1 ファイルに全キーを保存する KeyValueStore 実装
//!
//! 形式: `{"<key>": "<value>", ...}`。書き込みは tmp ファイル + rename で置き換える。

use crate::domain::StoreKey;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// ファイルに永続化する KeyValueStore（localStorage 相当）
pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    /// read-modify-write を直列化する
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(BTreeMap::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        if s.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", self.path.display(), e)))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        self.fs.write(&tmp, &json)?;
        self.fs.rename(&tmp, &self.path)
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), Error> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::system("store lock poisoned"))?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, Error> {
        Ok(self.load()?.remove(key.as_str()))
    }

    fn set(&self, key: StoreKey, value: &str) -> Result<(), Error> {
        self.update(|m| {
            m.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: StoreKey) -> Result<(), Error> {
        self.update(|m| {
            m.remove(key.as_str());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;

    const KEY_A: StoreKey = StoreKey::new("a");
    const KEY_B: StoreKey = StoreKey::new("b");

    fn store(dir: &Path) -> FileKeyValueStore {
        FileKeyValueStore::new(Arc::new(StdFileSystem), dir.join("data/storage.json"))
    }

    #[test]
    fn test_get_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(store(tmp.path()).get(KEY_A).unwrap(), None);
    }

    #[test]
    fn test_set_get_remove_persist_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        let s = store(tmp.path());
        s.set(KEY_A, "1").unwrap();
        s.set(KEY_B, "[]").unwrap();
        s.set(KEY_A, "2").unwrap();

        let reopened = store(tmp.path());
        assert_eq!(reopened.get(KEY_A).unwrap().as_deref(), Some("2"));
        assert_eq!(reopened.get(KEY_B).unwrap().as_deref(), Some("[]"));

        reopened.remove(KEY_A).unwrap();
        assert_eq!(s.get(KEY_A).unwrap(), None);
        assert!(!tmp.path().join("data/storage.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let tmp = tempfile::tempdir().unwrap();
        let s = store(tmp.path());
        std::fs::create_dir_all(tmp.path().join("data")).unwrap();
        std::fs::write(s.path(), "{not json").unwrap();
        let err = s.get(KEY_A).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
