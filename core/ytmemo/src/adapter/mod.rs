//! アダプター（ytmemo 固有の Outbound ポート実装）
//!
//! 汎用の I/O（ファイル・時刻・ログ・キー・バリューストア）は common::adapter を使う。

pub(crate) mod command_clipboard;
pub(crate) mod console_dialog;
pub(crate) mod console_input;
pub(crate) mod headless_player;
pub(crate) mod kv_app_store;
pub(crate) mod logging_app_store;
pub(crate) mod settings_loader;

pub(crate) use command_clipboard::CommandClipboard;
pub(crate) use console_dialog::{ConsoleDialog, SessionDialog};
pub(crate) use console_input::{spawn_console_input, SessionInput};
pub(crate) use headless_player::HeadlessPlayer;
pub(crate) use kv_app_store::KvAppStore;
pub(crate) use logging_app_store::LoggingAppStore;
pub(crate) use settings_loader::load_app_config;
