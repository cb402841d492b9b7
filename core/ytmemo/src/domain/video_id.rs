//! 動画 ID（Newtype）と URL からの抽出

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// 受け付ける URL 形式: youtube.com/watch?v=, youtu.be/, /embed/, /v/, /e/, /<x>/<y>/<id>
const VIDEO_URL_PATTERN: &str = r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})";

fn video_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VIDEO_URL_PATTERN).expect("VIDEO_URL_PATTERN is a valid regex"))
}

/// YouTube の動画 ID
///
/// URL から抽出したものは 11 文字の `[A-Za-z0-9_-]`。履歴から読み込んだ値は検証しない
/// （プレイヤーが報告した ID をそのまま保持する）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// URL 文字列から動画 ID を取り出す。認識できなければ None。
    pub fn from_url(url: &str) -> Option<Self> {
        video_url_regex()
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 履歴から開くときに URL 入力欄へ入れる正規 URL
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::ops::Deref for VideoId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
