pub(crate) mod app;
pub(crate) mod backup;
pub(crate) mod history;
pub(crate) mod memo;
pub(crate) mod player;
pub(crate) mod preferences;
pub(crate) mod session;
pub(crate) mod state;

pub(crate) use app::{AppController, AppParts, Flow};
pub(crate) use backup::{BackupUseCase, ImportOutcome};
pub(crate) use history::HistoryUseCase;
pub(crate) use memo::MemoUseCase;
pub(crate) use player::PlayerAdapter;
pub(crate) use preferences::PreferencesUseCase;
pub(crate) use session::SessionUseCase;
pub(crate) use state::AppState;
