//! ytmemo コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

use std::path::PathBuf;

use super::preferences::Theme;
use super::router::Page;
use super::video_id::VideoId;

/// ytmemo のサブコマンド
///
/// コマンドなし = 対話セッション起動。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,

    /// バージョン表示
    Version,

    /// 対話セッション（コマンド未指定時）。page は開始ページ。
    Session { page: Option<Page> },

    /// 履歴一覧（history [list]）
    HistoryList,
    /// タイトル検索（history search <query>）
    HistorySearch { query: String },
    /// 履歴一覧を HTML 断片で出力（history render）
    HistoryRender,
    /// 履歴削除（history delete <video-id>）
    HistoryDelete { id: VideoId },

    /// メモ一覧（memo list <video-id>）
    MemoList { id: VideoId },
    /// メモ一覧を HTML 断片で出力（memo render <video-id>）
    MemoRender { id: VideoId },

    /// バックアップ出力（export [--out DIR]）
    Export { out_dir: Option<PathBuf> },
    /// バックアップ読み込み（import <file>）
    Import { file: PathBuf },

    /// テーマ表示・変更（theme [light|dark]）
    Theme { theme: Option<Theme> },
    /// サイドバー状態の表示・切り替え（sidebar [toggle]）
    Sidebar { toggle: bool },

    /// 未知のコマンド・不正な引数（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する
    pub fn parse_with_args(name: &str, args: &[String]) -> Self {
        let first = args.first().map(|s| s.as_str());
        match name {
            "help" => Command::Help,
            "version" => Command::Version,
            "session" => match first {
                None => Command::Session { page: None },
                Some(s) => match Page::parse(s) {
                    Some(page) => Command::Session { page: Some(page) },
                    None => Command::Unknown(format!("session {}", s)),
                },
            },
            "history" => match first {
                None | Some("list") => Command::HistoryList,
                Some("search") => Command::HistorySearch {
                    query: args[1..].join(" "),
                },
                Some("render") => Command::HistoryRender,
                Some("delete") => match args.get(1) {
                    Some(id) => Command::HistoryDelete { id: VideoId::new(id.as_str()) },
                    None => Command::Unknown("history delete".to_string()),
                },
                Some(sub) => Command::Unknown(format!("history {}", sub)),
            },
            "memo" => match (first, args.get(1)) {
                (Some("list"), Some(id)) => Command::MemoList { id: VideoId::new(id.as_str()) },
                (Some("render"), Some(id)) => Command::MemoRender { id: VideoId::new(id.as_str()) },
                _ => Command::Unknown(format!("memo {}", first.unwrap_or("")).trim_end().to_string()),
            },
            "export" => match args {
                [] => Command::Export { out_dir: None },
                [flag, dir] if flag == "--out" || flag == "-o" => Command::Export {
                    out_dir: Some(PathBuf::from(dir)),
                },
                _ => Command::Unknown(format!("export {}", args.join(" "))),
            },
            "import" => match first {
                Some(file) => Command::Import { file: PathBuf::from(file) },
                None => Command::Unknown("import".to_string()),
            },
            "theme" => match first {
                None => Command::Theme { theme: None },
                Some(s) => match Theme::parse(s) {
                    Some(theme) => Command::Theme { theme: Some(theme) },
                    None => Command::Unknown(format!("theme {}", s)),
                },
            },
            "sidebar" => match first {
                None => Command::Sidebar { toggle: false },
                Some("toggle") => Command::Sidebar { toggle: true },
                Some(s) => Command::Unknown(format!("sidebar {}", s)),
            },
            other => Command::Unknown(other.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Version => "version",
            Command::Session { .. } => "session",
            Command::HistoryList => "history list",
            Command::HistorySearch { .. } => "history search",
            Command::HistoryRender => "history render",
            Command::HistoryDelete { .. } => "history delete",
            Command::MemoList { .. } => "memo list",
            Command::MemoRender { .. } => "memo render",
            Command::Export { .. } => "export",
            Command::Import { .. } => "import",
            Command::Theme { .. } => "theme",
            Command::Sidebar { .. } => "sidebar",
            Command::Unknown(_) => "unknown",
        }
    }

    /// ストアを書き換えるコマンドかどうか
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Session { .. }
                | Command::HistoryDelete { .. }
                | Command::Import { .. }
                | Command::Theme { theme: Some(_) }
                | Command::Sidebar { toggle: true }
        )
    }
}
