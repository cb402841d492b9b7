//! ドメイン層: 動画メモ・再生履歴・設定・画面状態の値型と純粋なルール
//!
//! I/O は持たない。永続化やプレイヤー操作は usecase 層が ports 経由で行う。

pub mod backup;
pub mod command;
pub mod feedback;
pub mod history;
pub mod memo;
pub mod notice;
pub mod preferences;
pub mod render;
pub mod router;
pub mod settings;
pub mod shortcut;
pub mod time;
pub mod ui_event;
pub mod video_id;

pub use backup::BackupEnvelope;
pub use command::Command;
pub use feedback::FeedbackIndicator;
pub use history::{HistoryEntry, HistoryList, Touched};
pub use memo::{Memo, MemoBoard, MemoId, MemoRow, RowMode};
pub use notice::{Confirmation, UserError};
pub use preferences::{Preferences, Theme};
pub use router::{Page, Router, SettingsSection};
pub use settings::AppConfig;
pub use shortcut::{KeyCode, KeyInput, RateStep, Shortcut};
pub use ui_event::{TextField, UiEvent};
pub use video_id::VideoId;
