//! 永続化の書き込みをログに記録する AppStore のラッパ

use crate::domain::{HistoryList, Theme};
use crate::ports::outbound::AppStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct LoggingAppStore {
    inner: Arc<dyn AppStore>,
    log: Arc<dyn Log>,
}

impl LoggingAppStore {
    pub fn new(inner: Arc<dyn AppStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn record(&self, operation: &str, result: &Result<(), Error>, extra: LogRecord) {
        let record = match result {
            Ok(()) => extra,
            Err(e) => {
                let mut r = extra.field("error", e.to_string());
                r.level = LogLevel::Error;
                r
            }
        };
        let _ = self.log.log(&record.field("operation", operation));
    }
}

impl AppStore for LoggingAppStore {
    fn load_history(&self) -> Result<HistoryList, Error> {
        self.inner.load_history()
    }

    fn save_history(&self, history: &HistoryList) -> Result<(), Error> {
        let result = self.inner.save_history(history);
        let memos: usize = history.entries().iter().map(|e| e.memos.len()).sum();
        self.record(
            "save_history",
            &result,
            LogRecord::new(LogLevel::Info, "adapter", "store", "store write")
                .field("entries", history.len())
                .field("memos", memos),
        );
        result
    }

    fn load_theme(&self) -> Result<Theme, Error> {
        self.inner.load_theme()
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Error> {
        let result = self.inner.save_theme(theme);
        self.record(
            "save_theme",
            &result,
            LogRecord::new(LogLevel::Info, "adapter", "store", "store write")
                .field("theme", theme.as_str()),
        );
        result
    }

    fn load_sidebar_collapsed(&self) -> Result<bool, Error> {
        self.inner.load_sidebar_collapsed()
    }

    fn save_sidebar_collapsed(&self, collapsed: bool) -> Result<(), Error> {
        let result = self.inner.save_sidebar_collapsed(collapsed);
        self.record(
            "save_sidebar_collapsed",
            &result,
            LogRecord::new(LogLevel::Info, "adapter", "store", "store write")
                .field("collapsed", collapsed),
        );
        result
    }
}
