//! セッション全体の可変状態
//!
//! 画面・メモ・履歴・設定の状態はすべてここに集め、AppController が所有する。
//! 各 usecase は `&mut AppState` を受け取って操作する。

use crate::domain::{
    FeedbackIndicator, HistoryList, MemoBoard, Preferences, Router, TextField, VideoId,
};
use crate::ports::outbound::AppStore;
use common::error::Error;

/// プレイヤーの準備ができるまで無効なボタン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub add_memo: bool,
    pub frame_step: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: HistoryList,
    /// 読み込み中または再生中の動画
    pub current_video: Option<VideoId>,
    /// プレイヤーが報告したタイトル
    pub current_title: Option<String>,
    pub memos: MemoBoard,
    pub router: Router,
    pub preferences: Preferences,
    pub url_input: String,
    pub quick_memo: String,
    pub history_query: String,
    pub focus: Option<TextField>,
    pub controls: Controls,
    pub feedback: FeedbackIndicator,
}

impl AppState {
    /// ストアの内容と起動時のフラグメント（"#history" 等）から組み立てる
    pub fn load(store: &dyn AppStore, fragment: &str) -> Result<Self, Error> {
        Ok(Self {
            history: store.load_history()?,
            current_video: None,
            current_title: None,
            memos: MemoBoard::new(),
            router: Router::from_fragment(fragment),
            preferences: Preferences {
                theme: store.load_theme()?,
                sidebar_collapsed: store.load_sidebar_collapsed()?,
            },
            url_input: String::new(),
            quick_memo: String::new(),
            history_query: String::new(),
            focus: None,
            controls: Controls::default(),
            feedback: FeedbackIndicator::default(),
        })
    }

    /// テキスト入力欄にフォーカスがあるか（ショートカット無効化の判定）
    pub fn text_field_focused(&self) -> bool {
        self.focus.is_some()
    }
}
