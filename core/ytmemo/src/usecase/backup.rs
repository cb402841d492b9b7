//! バックアップのエクスポート・インポート
//!
//! どちらも永続化された履歴を直接読み書きする。失敗時は何も書かない。

use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::backup::backup_file_name;
use crate::domain::notice::IMPORT_SUCCEEDED;
use crate::domain::{BackupEnvelope, Confirmation, UserError};
use crate::ports::outbound::{AppStore, Dialog};

/// インポートの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// 履歴を置き換えた（件数）
    Imported { entries: usize },
    /// 確認で拒否された
    Declined,
    /// 読み込み失敗・形式不正（アラート済み）
    Rejected,
}

pub struct BackupUseCase {
    store: Arc<dyn AppStore>,
    fs: Arc<dyn FileSystem>,
    dialog: Arc<dyn Dialog>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl BackupUseCase {
    pub fn new(
        store: Arc<dyn AppStore>,
        fs: Arc<dyn FileSystem>,
        dialog: Arc<dyn Dialog>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { store, fs, dialog, clock, log }
    }

    /// `out_dir/yt-memo-backup-YYYYMMDDHHMMSS.json` に書き出す。履歴が空ならアラートのみで None。
    pub fn export(&self, out_dir: &Path) -> Result<Option<PathBuf>, Error> {
        let history = self.store.load_history()?;
        if history.is_empty() {
            self.dialog.alert(&UserError::NothingToExport.to_string());
            return Ok(None);
        }
        let now = self.clock.now_utc();
        let entries = history.len();
        let json = BackupEnvelope::new(history, now).to_json_pretty()?;
        self.fs.create_dir_all(out_dir)?;
        let path = out_dir.join(backup_file_name(now));
        self.fs.write(&path, &json)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "backup", "backup exported")
                .field("path", path.display().to_string())
                .field("entries", entries),
        );
        Ok(Some(path))
    }

    /// ファイルを読んでインポートする
    pub fn import(&self, path: &Path) -> Result<ImportOutcome, Error> {
        match self.fs.read_to_string(path) {
            Ok(text) => self.import_text(&text),
            Err(e) => {
                self.dialog
                    .alert(&UserError::BackupReadFailed(e.to_string()).to_string());
                Ok(ImportOutcome::Rejected)
            }
        }
    }

    /// 検証 → 確認 → 履歴をまるごと置き換え
    pub fn import_text(&self, text: &str) -> Result<ImportOutcome, Error> {
        let history = match BackupEnvelope::parse_history(text) {
            Ok(h) => h,
            Err(e) => {
                self.dialog.alert(&e.to_string());
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "usecase", "backup", "backup rejected")
                        .field("reason", e.to_string()),
                );
                return Ok(ImportOutcome::Rejected);
            }
        };
        if !self.dialog.confirm(&Confirmation::ImportOverwrite)? {
            return Ok(ImportOutcome::Declined);
        }
        self.store.save_history(&history)?;
        self.dialog.alert(IMPORT_SUCCEEDED);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "backup", "backup imported")
                .field("entries", history.len()),
        );
        Ok(ImportOutcome::Imported {
            entries: history.len(),
        })
    }
}
