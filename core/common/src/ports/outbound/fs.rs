//! ファイルシステム Outbound ポート
//!
//! ストア・設定・バックアップ・ログのファイル I/O はすべてこの trait を通す。

use crate::error::Error;
use std::io::Write;
use std::path::Path;

/// 実装は `common::adapter::StdFileSystem`。エラーメッセージには対象パスを含める。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;

    /// 全体を書き換える（無ければ作成）
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;

    /// 同一ディレクトリ内の置き換え（ストアの書き込みを一括で反映するのに使う）
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;

    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;

    fn exists(&self, path: &Path) -> bool;

    /// 追記用に開く（無ければ作成）。drop で閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
}
