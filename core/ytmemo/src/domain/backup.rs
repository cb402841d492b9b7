//! エクスポート／インポート用のエンベロープ `{appId, version, timestamp, data}`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::history::HistoryList;
use super::notice::UserError;
use super::time::iso_millis;

/// バックアップを識別するアプリ ID
pub const APP_ID: &str = "yt-memo-app";
/// エンベロープの形式バージョン
pub const APP_VERSION: &str = "1.0";

/// バックアップファイルの中身
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEnvelope {
    pub app_id: String,
    pub version: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub data: HistoryList,
}

impl BackupEnvelope {
    pub fn new(data: HistoryList, now: DateTime<Utc>) -> Self {
        Self {
            app_id: APP_ID.to_string(),
            version: APP_VERSION.to_string(),
            timestamp: now,
            data,
        }
    }

    /// 2 スペースインデントの JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// バックアップファイルの本文を検証して履歴を取り出す
    ///
    /// - JSON として読めない → BackupReadFailed
    /// - appId 不一致、data が無い・偽値、data が履歴の形でない → InvalidBackupFormat
    ///
    /// version / timestamp は検証しない。
    pub fn parse_history(text: &str) -> Result<HistoryList, UserError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| UserError::BackupReadFailed(e.to_string()))?;
        if value.get("appId").and_then(Value::as_str) != Some(APP_ID) {
            return Err(UserError::InvalidBackupFormat);
        }
        let data = match value.get("data") {
            Some(d) if is_truthy(d) => d.clone(),
            _ => return Err(UserError::InvalidBackupFormat),
        };
        serde_json::from_value(data).map_err(|_| UserError::InvalidBackupFormat)
    }
}

/// JSON 値の真偽（null / false / 0 / "" は偽、配列・オブジェクトは空でも真）
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `yt-memo-backup-YYYYMMDDHHMMSS.json`（UTC）
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("yt-memo-backup-{}.json", now.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video_id::VideoId;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn sample_history() -> HistoryList {
        let mut h = HistoryList::new();
        h.touch(&VideoId::new("dQw4w9WgXcQ"), "Finals", at(1_714_566_896_789));
        h
    }

    #[test]
    fn test_envelope_json_shape() {
        let env = BackupEnvelope::new(sample_history(), at(1_714_566_896_000));
        let text = env.to_json_pretty().unwrap();
        assert!(text.contains("\n  \"appId\": \"yt-memo-app\""));
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["version"], "1.0");
        assert_eq!(v["timestamp"], "2024-05-01T12:34:56.000Z");
        assert_eq!(v["data"][0]["id"], "dQw4w9WgXcQ");
        assert_eq!(v["data"][0]["lastPlayed"], "2024-05-01T12:34:56.789Z");
    }

    #[test]
    fn test_parse_roundtrip() {
        let history = sample_history();
        let text = BackupEnvelope::new(history.clone(), at(0)).to_json_pretty().unwrap();
        assert_eq!(BackupEnvelope::parse_history(&text).unwrap(), history);
    }

    #[test]
    fn test_parse_rejects_wrong_app_id() {
        let text = r#"{"appId":"other-app","version":"1.0","timestamp":"2024-01-01T00:00:00.000Z","data":[]}"#;
        assert_eq!(
            BackupEnvelope::parse_history(text),
            Err(UserError::InvalidBackupFormat)
        );
    }

    #[test]
    fn test_parse_rejects_missing_or_falsy_data() {
        for text in [
            r#"{"appId":"yt-memo-app"}"#,
            r#"{"appId":"yt-memo-app","data":null}"#,
            r#"{"appId":"yt-memo-app","data":false}"#,
            r#"{"appId":"yt-memo-app","data":{"not":"a list"}}"#,
        ] {
            assert_eq!(
                BackupEnvelope::parse_history(text),
                Err(UserError::InvalidBackupFormat),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_parse_accepts_empty_list_and_js_written_entries() {
        assert!(BackupEnvelope::parse_history(r#"{"appId":"yt-memo-app","data":[]}"#)
            .unwrap()
            .is_empty());
        let text = r#"{"appId":"yt-memo-app","version":"1.0","timestamp":"2024-01-01T00:00:00.000Z",
            "data":[{"id":"dQw4w9WgXcQ","title":"t","lastPlayed":"2024-01-01T00:00:00.000Z",
            "memos":[{"id":1704067200000,"time":3.25,"text":"&lt;b&gt;"}]}]}"#;
        let h = BackupEnvelope::parse_history(text).unwrap();
        assert_eq!(h.entries()[0].memos[0].time, 3.25);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            BackupEnvelope::parse_history("not json"),
            Err(UserError::BackupReadFailed(_))
        ));
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(
            backup_file_name(at(1_714_566_896_789)),
            "yt-memo-backup-20240501123456.json"
        );
    }
}
