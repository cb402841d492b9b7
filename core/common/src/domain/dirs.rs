//! 実行時ディレクトリ（XDG / YTMEMO_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストア・ログ・設定ファイルのパス計算に使う。

use std::path::PathBuf;

const STORE_FILENAME: &str = "storage.json";
const SETTINGS_FILENAME: &str = "settings.json";
const LOG_FILENAME: &str = "ytmemo.jsonl";

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// キー・バリューストアのファイル（data/storage.json）
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    /// 任意の設定ファイル（config/settings.json）
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILENAME)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// 既定のログファイル（state/logs/ytmemo.jsonl）
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}
