//! プレイヤー上に一時表示するフィードバック（"1.5x" / "30%" 等）
//!
//! 表示のたびに消去タイマーを張り直す。

/// 既定の表示時間
pub const DEFAULT_FEEDBACK_MS: u64 = 1200;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackIndicator {
    text: Option<String>,
    hide_at_ms: u64,
}

impl FeedbackIndicator {
    /// テキストを表示し、now + duration_ms で消えるようにする
    pub fn show(&mut self, text: impl Into<String>, now_ms: u64, duration_ms: u64) {
        self.text = Some(text.into());
        self.hide_at_ms = now_ms.saturating_add(duration_ms);
    }

    /// now 時点で表示中のテキスト
    pub fn visible_text(&self, now_ms: u64) -> Option<&str> {
        match &self.text {
            Some(t) if now_ms < self.hide_at_ms => Some(t.as_str()),
            _ => None,
        }
    }
}
