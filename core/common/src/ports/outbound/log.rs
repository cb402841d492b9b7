//! 構造化ログ Outbound ポート
//!
//! JSONL の 1 行 = 1 レコード。利用者向けの表示（stdout / stderr / ダイアログ）とは別チャネル。

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード
///
/// `layer` は出力元の層（cli / usecase / adapter）、`kind` は話題
/// （lifecycle / memo / history / backup / player / store / session）。
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// RFC3339（ミリ秒、UTC）
    pub ts: String,
    pub level: LogLevel,
    pub layer: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Value>,
}

impl LogRecord {
    /// 現在時刻のレコードを作る
    pub fn new(
        level: LogLevel,
        layer: &'static str,
        kind: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level,
            layer,
            kind,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// キー・値を 1 つ追加する（同じキーは上書き）
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}

/// 構造化ログの出力先
///
/// 書き込み失敗は呼び出し側で `let _ =` として捨てる（ログのせいで操作を失敗させない）。
pub trait Log: Send + Sync {
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}
