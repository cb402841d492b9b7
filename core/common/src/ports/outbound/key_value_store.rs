//! キー・バリューストア Outbound ポート
//!
//! ブラウザの localStorage 相当。値は文字列のまま保存し、型付けは上位（AppStore）で行う。

use crate::domain::StoreKey;
use crate::error::Error;

/// 永続キー・バリューストア
///
/// 実装は `FileKeyValueStore`（JSON ファイル）や `MemoryKeyValueStore`（テスト用）。
pub trait KeyValueStore: Send + Sync {
    /// キーの値を返す（未設定なら Ok(None)）
    fn get(&self, key: StoreKey) -> Result<Option<String>, Error>;
    /// キーに値を書き込む（既存値は上書き）
    fn set(&self, key: StoreKey, value: &str) -> Result<(), Error>;
    /// キーを削除する（未設定でも Ok）
    fn remove(&self, key: StoreKey) -> Result<(), Error>;
}
