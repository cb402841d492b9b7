//! メモリ上の KeyValueStore（テスト・一時セッション用）

use crate::domain::StoreKey;
use crate::error::Error;
use crate::ports::outbound::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<&'static str, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<&'static str, String>>, Error> {
        self.entries
            .lock()
            .map_err(|_| Error::system("store lock poisoned"))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, Error> {
        Ok(self.entries()?.get(key.as_str()).cloned())
    }

    fn set(&self, key: StoreKey, value: &str) -> Result<(), Error> {
        self.entries()?.insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), Error> {
        self.entries()?.remove(key.as_str());
        Ok(())
    }
}
