//! KeyValueStore 上の AppStore 実装
//!
//! キー名と値の文字列表現はブラウザ版の localStorage と同じ。

use crate::domain::{HistoryList, Theme};
use crate::ports::outbound::AppStore;
use common::domain::StoreKey;
use common::error::Error;
use common::ports::outbound::KeyValueStore;
use std::sync::Arc;

pub const HISTORY_KEY: StoreKey = StoreKey::new("yt-memo-history");
pub const THEME_KEY: StoreKey = StoreKey::new("yt-memo-theme");
pub const SIDEBAR_COLLAPSED_KEY: StoreKey = StoreKey::new("yt-memo-sidebar-collapsed");

pub struct KvAppStore {
    kv: Arc<dyn KeyValueStore>,
}

impl KvAppStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }
}

impl AppStore for KvAppStore {
    fn load_history(&self) -> Result<HistoryList, Error> {
        match self.kv.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::json(format!("{}: {}", HISTORY_KEY, e))),
            None => Ok(HistoryList::new()),
        }
    }

    fn save_history(&self, history: &HistoryList) -> Result<(), Error> {
        let raw = serde_json::to_string(history)?;
        self.kv.set(HISTORY_KEY, &raw)
    }

    fn load_theme(&self) -> Result<Theme, Error> {
        Ok(self
            .kv
            .get(THEME_KEY)?
            .map(|s| Theme::from_stored(&s))
            .unwrap_or_default())
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Error> {
        self.kv.set(THEME_KEY, theme.as_str())
    }

    fn load_sidebar_collapsed(&self) -> Result<bool, Error> {
        Ok(self.kv.get(SIDEBAR_COLLAPSED_KEY)?.as_deref() == Some("true"))
    }

    fn save_sidebar_collapsed(&self, collapsed: bool) -> Result<(), Error> {
        self.kv
            .set(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoId;
    use chrono::{TimeZone, Utc};
    use common::adapter::MemoryKeyValueStore;

    fn store() -> (Arc<MemoryKeyValueStore>, KvAppStore) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let app = KvAppStore::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>);
        (kv, app)
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let (_, app) = store();
        assert!(app.load_history().unwrap().is_empty());
        assert_eq!(app.load_theme().unwrap(), Theme::Light);
        assert!(!app.load_sidebar_collapsed().unwrap());
    }

    #[test]
    fn test_history_uses_browser_key_and_shape() {
        let (kv, app) = store();
        let mut list = HistoryList::new();
        list.touch(
            &VideoId::new("dQw4w9WgXcQ"),
            "title",
            Utc.timestamp_millis_opt(0).unwrap(),
        );
        app.save_history(&list).unwrap();

        let raw = kv.get(HISTORY_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"dQw4w9WgXcQ","title":"title","lastPlayed":"1970-01-01T00:00:00.000Z","memos":[]}]"#
        );
        assert_eq!(app.load_history().unwrap(), list);
    }

    #[test]
    fn test_corrupt_history_is_json_error() {
        let (kv, app) = store();
        kv.set(HISTORY_KEY, "{not json").unwrap();
        assert!(matches!(app.load_history(), Err(Error::Json(_))));
    }

    #[test]
    fn test_theme_and_sidebar_string_values() {
        let (kv, app) = store();
        app.save_theme(Theme::Dark).unwrap();
        assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        kv.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(app.load_theme().unwrap(), Theme::Light);

        app.save_sidebar_collapsed(true).unwrap();
        assert_eq!(kv.get(SIDEBAR_COLLAPSED_KEY).unwrap().as_deref(), Some("true"));
        assert!(app.load_sidebar_collapsed().unwrap());
        kv.set(SIDEBAR_COLLAPSED_KEY, "yes").unwrap();
        assert!(!app.load_sidebar_collapsed().unwrap());
    }
}
