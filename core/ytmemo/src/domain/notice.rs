//! ユーザーに見せるメッセージ（アラートと確認ダイアログ）
//!
//! いずれも状態を変えずに Dialog ポートへ渡すだけ。

use std::fmt;

/// アラートで知らせる利用者側のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// URL から動画 ID を取り出せない
    #[error("This is not a valid YouTube video URL.")]
    InvalidUrl,
    /// プレイヤー未作成でメモを追加しようとした
    #[error("No video is loaded.")]
    NoVideoLoaded,
    /// エクスポート対象の履歴が空
    #[error("There is no data to export.")]
    NothingToExport,
    /// バックアップの appId 不一致・data 欠落・形式違い
    #[error("Invalid file format.")]
    InvalidBackupFormat,
    /// バックアップファイルの読み込み・JSON パースに失敗
    #[error("An error occurred while reading the file: {0}")]
    BackupReadFailed(String),
    /// クリップボードを読めない（権限拒否等）
    #[error("Failed to paste from the clipboard. Check the permissions: {0}")]
    ClipboardUnavailable(String),
}

/// インポート完了時のアラート
pub const IMPORT_SUCCEEDED: &str = "Data was imported successfully. Reloading.";

/// 取り消せない操作の前に出す確認
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DeleteMemo,
    /// 履歴のタイトルを示して削除確認（見つからなければ汎用表現）
    DeleteHistoryEntry { title: Option<String> },
    /// インポートで既存の履歴・メモをすべて上書きする
    ImportOverwrite,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::DeleteMemo => {
                f.write_str("Delete this memo? This action cannot be undone.")
            }
            Confirmation::DeleteHistoryEntry { title } => write!(
                f,
                "Delete \"{}\" from the history? This action cannot be undone.",
                title.as_deref().unwrap_or("this item")
            ),
            Confirmation::ImportOverwrite => f.write_str(
                "All current history and memos will be overwritten. Continue?",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_history_names_title() {
        let c = Confirmation::DeleteHistoryEntry {
            title: Some("EVO Finals".to_string()),
        };
        assert!(c.to_string().contains("\"EVO Finals\""));
        let c = Confirmation::DeleteHistoryEntry { title: None };
        assert!(c.to_string().contains("\"this item\""));
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(
            UserError::InvalidUrl.to_string(),
            "This is not a valid YouTube video URL."
        );
        assert!(UserError::BackupReadFailed("eof".to_string())
            .to_string()
            .ends_with(": eof"));
    }
}
