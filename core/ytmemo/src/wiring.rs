//! 配線: 標準アダプタで usecase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    FileJsonLog, FileKeyValueStore, NoopLog, StdClock, StdEnvResolver, StdFileSystem,
    StdIdGenerator,
};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, IdGenerator, KeyValueStore, Log};

use crate::adapter::{load_app_config, HeadlessPlayer, KvAppStore, LoggingAppStore};
use crate::domain::AppConfig;
use crate::ports::outbound::{AppStore, Clipboard, Dialog, PlayerBackend};
use crate::usecase::{
    AppController, AppParts, BackupUseCase, HistoryUseCase, MemoUseCase, PlayerAdapter,
    PreferencesUseCase,
};

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub store: Arc<dyn AppStore>,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub settings: AppConfig,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// ストアは data/storage.json、設定は config/settings.json、ログは state/logs/ytmemo.jsonl。
pub fn wire_ytmemo() -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let dirs = env_resolver.resolve_dirs()?;
    let settings = load_app_config(&*fs, &dirs.settings_file())?;
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));
    let kv: Arc<dyn KeyValueStore> =
        Arc::new(FileKeyValueStore::new(Arc::clone(&fs), dirs.store_file()));
    let store: Arc<dyn AppStore> = Arc::new(LoggingAppStore::new(
        Arc::new(KvAppStore::new(kv)),
        Arc::clone(&logger),
    ));
    Ok(App {
        fs,
        clock,
        ids,
        store,
        logger,
        settings,
    })
}

impl App {
    pub fn memo_use_case(&self, dialog: Arc<dyn Dialog>) -> MemoUseCase {
        MemoUseCase::new(
            Arc::clone(&self.store),
            dialog,
            Arc::clone(&self.ids),
            Arc::clone(&self.logger),
        )
    }

    pub fn history_use_case(&self, dialog: Arc<dyn Dialog>) -> HistoryUseCase {
        HistoryUseCase::new(
            Arc::clone(&self.store),
            dialog,
            Arc::clone(&self.clock),
            Arc::clone(&self.logger),
        )
    }

    pub fn backup_use_case(&self, dialog: Arc<dyn Dialog>) -> BackupUseCase {
        BackupUseCase::new(
            Arc::clone(&self.store),
            Arc::clone(&self.fs),
            dialog,
            Arc::clone(&self.clock),
            Arc::clone(&self.logger),
        )
    }

    pub fn preferences_use_case(&self) -> PreferencesUseCase {
        PreferencesUseCase::new(Arc::clone(&self.store))
    }

    /// 設定の長さで動くヘッドレスプレイヤー
    pub fn headless_player(&self) -> Box<dyn PlayerBackend> {
        Box::new(HeadlessPlayer::new(
            Arc::clone(&self.clock),
            self.settings.headless_duration_secs,
        ))
    }

    /// 対話セッション用のコントローラを組み立てる
    pub fn app_controller(
        &self,
        dialog: Arc<dyn Dialog>,
        clipboard: Arc<dyn Clipboard>,
        backend: Box<dyn PlayerBackend>,
        export_dir: PathBuf,
        fragment: &str,
    ) -> Result<AppController, Error> {
        let parts = AppParts {
            store: Arc::clone(&self.store),
            dialog: Arc::clone(&dialog),
            clipboard,
            clock: Arc::clone(&self.clock),
            log: Arc::clone(&self.logger),
            memo: self.memo_use_case(Arc::clone(&dialog)),
            history: self.history_use_case(Arc::clone(&dialog)),
            backup: self.backup_use_case(dialog),
            preferences: self.preferences_use_case(),
            player: PlayerAdapter::new(backend, self.settings.frame_rate),
            feedback_ms: self.settings.feedback_ms,
            export_dir,
        };
        AppController::load(parts, fragment)
    }
}
