//! 現在の動画のメモ操作（追加・編集・削除・動画切り替え・保存）
//!
//! メモの永続先は履歴エントリ。変更のたびに flush で書き戻す。

use common::error::Error;
use common::ports::outbound::{IdGenerator, Log, LogLevel, LogRecord};
use std::sync::Arc;

use super::state::AppState;
use crate::domain::{Confirmation, Memo, MemoBoard, MemoId, UserError, VideoId};
use crate::ports::outbound::{AppStore, Dialog};

pub struct MemoUseCase {
    store: Arc<dyn AppStore>,
    dialog: Arc<dyn Dialog>,
    ids: Arc<dyn IdGenerator>,
    log: Arc<dyn Log>,
}

impl MemoUseCase {
    pub fn new(
        store: Arc<dyn AppStore>,
        dialog: Arc<dyn Dialog>,
        ids: Arc<dyn IdGenerator>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { store, dialog, ids, log }
    }

    /// 再生位置 `time` にメモを追加する。プレイヤーが無ければ（time が None）アラートのみ。
    ///
    /// 本文は trim する（空文字も可）。追加後はクイックメモ欄を空にする。
    pub fn add(
        &self,
        state: &mut AppState,
        text: &str,
        time: Option<f64>,
    ) -> Result<Option<MemoId>, Error> {
        let Some(time) = time else {
            self.dialog.alert(&UserError::NoVideoLoaded.to_string());
            return Ok(None);
        };
        let id = MemoId::new(self.ids.next_id());
        state.memos.insert(Memo {
            id,
            time,
            text: text.trim().to_string(),
        });
        self.flush(state)?;
        state.quick_memo.clear();
        Ok(Some(id))
    }

    /// 本文を上書きして編集モードを抜ける。ID が無ければ何もしない。
    pub fn edit(&self, state: &mut AppState, id: MemoId, new_text: &str) -> Result<bool, Error> {
        if !state.memos.set_text(id, new_text.trim()) {
            return Ok(false);
        }
        self.flush(state)?;
        Ok(true)
    }

    /// 確認のうえ削除する。拒否されたら何もしない。
    pub fn delete(&self, state: &mut AppState, id: MemoId) -> Result<bool, Error> {
        if state.memos.get(id).is_none() {
            return Ok(false);
        }
        if !self.dialog.confirm(&Confirmation::DeleteMemo)? {
            return Ok(false);
        }
        state.memos.remove(id);
        state.memos.cancel_edit();
        self.flush(state)?;
        Ok(true)
    }

    pub fn enter_edit(&self, state: &mut AppState, id: MemoId) -> bool {
        state.memos.enter_edit(id)
    }

    pub fn cancel_edit(&self, state: &mut AppState) {
        state.memos.cancel_edit();
    }

    /// 前の動画のメモを書き戻してから、新しい動画のメモを履歴から読み込む
    pub fn switch_video(&self, state: &mut AppState, new_id: &VideoId) -> Result<(), Error> {
        self.flush(state)?;
        let memos = state
            .history
            .find(new_id)
            .map(|e| e.memos.clone())
            .unwrap_or_default();
        state.memos = MemoBoard::from_memos(memos);
        state.current_video = Some(new_id.clone());
        state.current_title = None;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "memo", "memos loaded")
                .field("video_id", new_id.as_str())
                .field("count", state.memos.len()),
        );
        Ok(())
    }

    /// メモを現在の動画の履歴エントリへ書き戻して保存する。
    ///
    /// 動画が無い・エントリが無い場合は何もせず false。
    pub fn flush(&self, state: &mut AppState) -> Result<bool, Error> {
        let Some(id) = state.current_video.as_ref() else {
            return Ok(false);
        };
        if !state.history.set_memos(id, state.memos.to_memos()) {
            return Ok(false);
        }
        self.store.save_history(&state.history)?;
        Ok(true)
    }
}
