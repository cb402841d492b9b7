//! 任意の設定ファイル（config/settings.json）

use serde::Deserialize;

use super::feedback::DEFAULT_FEEDBACK_MS;

/// コマ送りの基準フレームレート（格闘ゲーム動画を想定）
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// ヘッドレスプレイヤーが報告する動画の長さ（秒）
pub const DEFAULT_HEADLESS_DURATION_SECS: f64 = 600.0;

/// アプリ設定。すべて省略可能。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub frame_rate: f64,
    pub feedback_ms: u64,
    pub headless_duration_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            feedback_ms: DEFAULT_FEEDBACK_MS,
            headless_duration_secs: DEFAULT_HEADLESS_DURATION_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let c: AppConfig = serde_json::from_str(r#"{"frame_rate": 30}"#).unwrap();
        assert_eq!(c.frame_rate, 30.0);
        assert_eq!(c.feedback_ms, DEFAULT_FEEDBACK_MS);
        assert_eq!(c, AppConfig { frame_rate: 30.0, ..AppConfig::default() });
    }

    #[test]
    fn test_empty_object_is_default() {
        let c: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, AppConfig::default());
    }
}
