//! 環境変数解決 Outbound ポート
//!
//! データ・設定・ログのディレクトリを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
pub trait EnvResolver: Send + Sync {
    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. YTMEMO_HOME（設定されていれば $YTMEMO_HOME/{config,data,state}）
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME 配下の ytmemo
    /// 3. $HOME/.config/ytmemo, $HOME/.local/share/ytmemo, $HOME/.local/state/ytmemo
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// ログファイルのパス（YTMEMO_LOG_FILE があればそれ、なければ state/logs/ytmemo.jsonl）
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
