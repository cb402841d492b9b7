//! クリップボード読み取り Outbound ポート

use common::error::Error;

pub trait Clipboard: Send + Sync {
    /// クリップボードのテキストを返す
    fn read_text(&self) -> Result<String, Error>;
}
