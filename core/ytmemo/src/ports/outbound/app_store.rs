//! 型付き永続化 Outbound ポート
//!
//! 3 つの独立したエントリ（履歴・テーマ・サイドバー）を読み書きする。
//! 呼び出し側は生のキー・文字列を扱わない。

use crate::domain::{HistoryList, Theme};
use common::error::Error;

pub trait AppStore: Send + Sync {
    /// 未保存なら空の履歴。壊れた JSON は Error::Json。
    fn load_history(&self) -> Result<HistoryList, Error>;
    fn save_history(&self, history: &HistoryList) -> Result<(), Error>;

    /// 未保存・未知の値は Light
    fn load_theme(&self) -> Result<Theme, Error>;
    fn save_theme(&self, theme: Theme) -> Result<(), Error>;

    /// 文字列 "true" のときだけ true
    fn load_sidebar_collapsed(&self) -> Result<bool, Error>;
    fn save_sidebar_collapsed(&self, collapsed: bool) -> Result<(), Error>;
}
