//! 再生履歴（最近再生した順、上限 100 件）
//!
//! メモの唯一の永続先。各エントリが自分の動画のメモ一覧を持つ。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::memo::Memo;
use super::time::iso_millis;
use super::video_id::VideoId;

/// 履歴の上限件数。超えたら最も古い（末尾）エントリを落とす。
pub const HISTORY_CAPACITY: usize = 100;

/// 1 動画分の履歴（永続化形式: `{id, title, lastPlayed, memos}`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: VideoId,
    pub title: String,
    #[serde(with = "iso_millis")]
    pub last_played: DateTime<Utc>,
    /// 古いデータには無いことがある
    #[serde(default)]
    pub memos: Vec<Memo>,
}

/// touch の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touched {
    /// 既存エントリを先頭へ移動した
    Moved,
    /// 新規エントリを先頭に追加した（押し出されたエントリがあれば evicted）
    Inserted { evicted: bool },
}

/// 再生履歴（先頭が最新）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: Vec<HistoryEntry>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &VideoId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// 再生を記録する。既存なら先頭へ移して lastPlayed を更新、無ければ先頭に追加。
    pub fn touch(&mut self, id: &VideoId, title: &str, now: DateTime<Utc>) -> Touched {
        if let Some(pos) = self.entries.iter().position(|e| &e.id == id) {
            let mut entry = self.entries.remove(pos);
            entry.last_played = now;
            self.entries.insert(0, entry);
            return Touched::Moved;
        }
        self.entries.insert(
            0,
            HistoryEntry {
                id: id.clone(),
                title: title.to_string(),
                last_played: now,
                memos: Vec::new(),
            },
        );
        let evicted = self.entries.len() > HISTORY_CAPACITY;
        self.entries.truncate(HISTORY_CAPACITY);
        Touched::Inserted { evicted }
    }

    /// タイトルの部分一致（大文字小文字を区別しない）。履歴自体は変更しない。
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// エントリを削除して返す
    pub fn remove(&mut self, id: &VideoId) -> Option<HistoryEntry> {
        let pos = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// 指定動画のメモを差し替える。エントリが無ければ false。
    pub fn set_memos(&mut self, id: &VideoId, memos: Vec<Memo>) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.memos = memos;
                true
            }
            None => false,
        }
    }
}
