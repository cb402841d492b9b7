//! ユーザーへの通知・確認 Outbound ポート（ブラウザの alert / confirm 相当）

use crate::domain::Confirmation;
use common::error::Error;

pub trait Dialog: Send + Sync {
    /// メッセージを表示する
    fn alert(&self, message: &str);

    /// はい/いいえを尋ねる。入力が読めなかった場合はエラー。
    fn confirm(&self, question: &Confirmation) -> Result<bool, Error>;
}
