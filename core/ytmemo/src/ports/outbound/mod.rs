//! Outbound ポート: アプリが外界（ストア・ダイアログ・クリップボード・プレイヤー）を使うための trait

pub mod app_store;
pub mod clipboard;
pub mod dialog;
pub mod player_backend;

pub use app_store::AppStore;
pub use clipboard::Clipboard;
pub use dialog::Dialog;
pub use player_backend::{PlayerBackend, PlayerEvent, PlayerOptions, PlayerState, VideoData};
