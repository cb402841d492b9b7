//! 表示設定（テーマ・サイドバー）。履歴とは独立に保存される。

use std::fmt;

/// UI テーマ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 保存値から読む。未知の値は Light。
    pub fn from_stored(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// ユーザー入力から読む（大文字小文字は無視）。未知の値は None。
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 起動時に読み込む表示設定一式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
}

impl Preferences {
    /// サイドバー開閉ボタンのラベルとツールチップ
    pub fn sidebar_toggle_label(&self) -> (&'static str, &'static str) {
        if self.sidebar_collapsed {
            ("»", "Expand sidebar")
        } else {
            ("«", "Collapse sidebar")
        }
    }
}
