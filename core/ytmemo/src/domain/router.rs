//! ページ切り替え（video / history / settings）
//!
//! 初期ページは URL フラグメントから決まり、以後はナビゲーションで遷移する。

use std::fmt;

/// 設定ページ内のサブページ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsSection {
    /// テーマ・サイドバー
    #[default]
    General,
    /// インポート・エクスポート
    Data,
}

impl SettingsSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsSection::General => "general",
            SettingsSection::Data => "data",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(SettingsSection::General),
            "data" => Some(SettingsSection::Data),
            _ => None,
        }
    }
}

/// トップレベルのページ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Video,
    History,
    Settings,
}

impl Page {
    /// `#history…` → History、`#settings…` → Settings、それ以外は Video
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.starts_with("#history") {
            Page::History
        } else if fragment.starts_with("#settings") {
            Page::Settings
        } else {
            Page::Video
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim_start_matches('#') {
            "video" => Some(Page::Video),
            "history" => Some(Page::History),
            "settings" => Some(Page::Settings),
            _ => None,
        }
    }

    /// ナビゲーションリンクの href
    pub fn fragment(&self) -> &'static str {
        match self {
            Page::Video => "#video",
            Page::History => "#history",
            Page::Settings => "#settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment().trim_start_matches('#'))
    }
}

/// 表示中のページとリンクのハイライト状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    page: Page,
    settings_section: SettingsSection,
    /// pushState 相当（最後に遷移したフラグメント）
    location: String,
}

impl Router {
    /// 起動時: フラグメントから初期ページを決める
    pub fn from_fragment(fragment: &str) -> Self {
        let page = Page::from_fragment(fragment);
        Self {
            page,
            settings_section: SettingsSection::default(),
            location: fragment.to_string(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn settings_section(&self) -> SettingsSection {
        self.settings_section
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// リンクがアクティブ表示か
    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    /// ページを切り替える。戻り値が true なら履歴一覧を描き直す。
    pub fn navigate(&mut self, page: Page) -> bool {
        self.page = page;
        self.location = page.fragment().to_string();
        page == Page::History
    }

    /// 設定ページ内のサブページを切り替える
    pub fn select_settings_section(&mut self, section: SettingsSection) {
        self.settings_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_from_fragment() {
        assert_eq!(Page::from_fragment("#history"), Page::History);
        assert_eq!(Page::from_fragment("#history-old"), Page::History);
        assert_eq!(Page::from_fragment("#settings"), Page::Settings);
        assert_eq!(Page::from_fragment("#video"), Page::Video);
        assert_eq!(Page::from_fragment(""), Page::Video);
        assert_eq!(Page::from_fragment("#unknown"), Page::Video);
    }

    #[test]
    fn test_navigate_updates_highlight_and_location() {
        let mut r = Router::from_fragment("");
        assert!(r.is_active(Page::Video));
        assert!(r.navigate(Page::History));
        assert!(r.is_active(Page::History));
        assert!(!r.is_active(Page::Video));
        assert_eq!(r.location(), "#history");
        assert!(!r.navigate(Page::Settings));
        assert_eq!(r.location(), "#settings");
    }

    #[test]
    fn test_settings_section_is_nested_state() {
        let mut r = Router::from_fragment("#settings");
        assert_eq!(r.settings_section(), SettingsSection::General);
        r.select_settings_section(SettingsSection::Data);
        r.navigate(Page::Video);
        r.navigate(Page::Settings);
        assert_eq!(r.settings_section(), SettingsSection::Data);
    }
}
