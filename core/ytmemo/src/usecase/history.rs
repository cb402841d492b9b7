//! 再生履歴の記録・検索・削除

use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

use super::state::AppState;
use crate::domain::{Confirmation, HistoryEntry, Touched, VideoId};
use crate::ports::outbound::{AppStore, Dialog};

pub struct HistoryUseCase {
    store: Arc<dyn AppStore>,
    dialog: Arc<dyn Dialog>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl HistoryUseCase {
    pub fn new(
        store: Arc<dyn AppStore>,
        dialog: Arc<dyn Dialog>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { store, dialog, clock, log }
    }

    /// 再生を記録して保存する（既存は先頭へ、新規は先頭に追加、100 件超は末尾を落とす）
    pub fn touch(&self, state: &mut AppState, id: &VideoId, title: &str) -> Result<Touched, Error> {
        let touched = state.history.touch(id, title, self.clock.now_utc());
        self.store.save_history(&state.history)?;
        if let Touched::Inserted { evicted } = touched {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Info, "usecase", "history", "history entry added")
                    .field("video_id", id.as_str())
                    .field("evicted", evicted),
            );
        }
        Ok(touched)
    }

    /// タイトル検索（履歴は変更しない）
    pub fn search<'a>(&self, state: &'a AppState, query: &str) -> Vec<&'a HistoryEntry> {
        state.history.search(query)
    }

    /// タイトルを示して確認のうえ削除する。拒否されたら何もしない。
    pub fn delete(&self, state: &mut AppState, id: &VideoId) -> Result<bool, Error> {
        let title = state.history.find(id).map(|e| e.title.clone());
        if !self
            .dialog
            .confirm(&Confirmation::DeleteHistoryEntry { title })?
        {
            return Ok(false);
        }
        if state.history.remove(id).is_none() {
            return Ok(false);
        }
        self.store.save_history(&state.history)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "history", "history entry deleted")
                .field("video_id", id.as_str()),
        );
        Ok(true)
    }
}
