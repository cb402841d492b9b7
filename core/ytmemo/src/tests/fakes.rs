//! テスト用のポート実装と AppController の組み立て

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use common::adapter::{ManualClock, MemoryKeyValueStore, NoopLog, StdFileSystem, StdIdGenerator};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, IdGenerator, KeyValueStore, Log};

use crate::adapter::{HeadlessPlayer, KvAppStore};
use crate::domain::{Confirmation, UiEvent};
use crate::ports::outbound::{
    AppStore, Clipboard, Dialog, PlayerBackend, PlayerEvent, PlayerOptions, PlayerState, VideoData,
};
use crate::usecase::{
    AppController, AppParts, BackupUseCase, Flow, HistoryUseCase, MemoUseCase, PlayerAdapter,
    PreferencesUseCase,
};

/// 起動時刻（ms）
pub const START_MS: u64 = 1_700_000_000_000;
/// ヘッドレスプレイヤーの動画の長さ（秒）
pub const DURATION_SECS: f64 = 100.0;
pub const FEEDBACK_MS: u64 = 1_000;

/// 用意した回答を順に返し、alert と confirm の内容を記録する Dialog
pub struct ScriptedDialog {
    answers: Mutex<VecDeque<bool>>,
    alerts: Mutex<Vec<String>>,
    questions: Mutex<Vec<Confirmation>>,
}

impl ScriptedDialog {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            alerts: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(&self, yes: bool) {
        self.answers.lock().unwrap().push_back(yes);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<Confirmation> {
        self.questions.lock().unwrap().clone()
    }
}

impl Dialog for ScriptedDialog {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    /// 回答が尽きたら「いいえ」
    fn confirm(&self, question: &Confirmation) -> Result<bool, Error> {
        self.questions.lock().unwrap().push(question.clone());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}

/// 固定の内容（または失敗）を返す Clipboard
pub struct FakeClipboard(Result<String, String>);

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        Self(Ok(text.to_string()))
    }

    pub fn denied() -> Self {
        Self(Err("permission denied".to_string()))
    }
}

impl Clipboard for FakeClipboard {
    fn read_text(&self) -> Result<String, Error> {
        self.0.clone().map_err(Error::system)
    }
}

/// release されるまで通知を渡さない PlayerBackend（読み込みが遅い動画）
pub struct DelayedPlayer {
    inner: HeadlessPlayer,
    released: Arc<AtomicBool>,
}

impl DelayedPlayer {
    /// プレイヤーと、通知を解放するためのフラグ
    pub fn new(clock: Arc<dyn Clock>) -> (Self, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        let player = Self {
            inner: HeadlessPlayer::new(clock, DURATION_SECS),
            released: Arc::clone(&released),
        };
        (player, released)
    }
}

impl PlayerBackend for DelayedPlayer {
    fn create(&mut self, video_id: &str, options: &PlayerOptions) -> Result<(), Error> {
        self.inner.create(video_id, options)
    }

    fn load_video_by_id(&mut self, video_id: &str) -> Result<(), Error> {
        self.inner.load_video_by_id(video_id)
    }

    fn destroy(&mut self) {
        self.inner.destroy()
    }

    fn play(&mut self) {
        self.inner.play()
    }

    fn pause(&mut self) {
        self.inner.pause()
    }

    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) {
        self.inner.seek_to(seconds, allow_seek_ahead)
    }

    fn current_time(&self) -> f64 {
        self.inner.current_time()
    }

    fn duration(&self) -> f64 {
        self.inner.duration()
    }

    fn playback_rate(&self) -> f64 {
        self.inner.playback_rate()
    }

    fn available_playback_rates(&self) -> Vec<f64> {
        self.inner.available_playback_rates()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.inner.set_playback_rate(rate)
    }

    fn state(&self) -> PlayerState {
        self.inner.state()
    }

    fn video_data(&self) -> Option<VideoData> {
        self.inner.video_data()
    }

    fn take_events(&mut self) -> Vec<PlayerEvent> {
        if self.released.load(Ordering::SeqCst) {
            self.inner.take_events()
        } else {
            Vec::new()
        }
    }
}

pub fn memory_store() -> Arc<dyn AppStore> {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    Arc::new(KvAppStore::new(kv))
}

pub fn backup_use_case(
    store: &Arc<dyn AppStore>,
    dialog: &Arc<ScriptedDialog>,
    clock: &Arc<ManualClock>,
) -> BackupUseCase {
    BackupUseCase::new(
        Arc::clone(store),
        Arc::new(StdFileSystem) as Arc<dyn FileSystem>,
        Arc::clone(dialog) as Arc<dyn Dialog>,
        Arc::clone(clock) as Arc<dyn Clock>,
        Arc::new(NoopLog) as Arc<dyn Log>,
    )
}

/// メモリ上のストアとヘッドレスプレイヤーで動く AppController
pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub store: Arc<dyn AppStore>,
    pub dialog: Arc<ScriptedDialog>,
    pub controller: AppController,
    out: Vec<u8>,
}

impl Harness {
    pub fn new(export_dir: &Path) -> Self {
        Self::with(memory_store(), FakeClipboard::denied(), export_dir)
    }

    pub fn with(store: Arc<dyn AppStore>, clipboard: FakeClipboard, export_dir: &Path) -> Self {
        let clock = Arc::new(ManualClock::new(START_MS));
        let player = HeadlessPlayer::new(Arc::clone(&clock) as Arc<dyn Clock>, DURATION_SECS);
        Self::assemble(store, clipboard, clock, Box::new(player), export_dir)
    }

    /// 読み込み完了の通知が遅れるプレイヤーで組み立てる
    pub fn with_delayed_player(export_dir: &Path) -> (Self, Arc<AtomicBool>) {
        let clock = Arc::new(ManualClock::new(START_MS));
        let (player, released) = DelayedPlayer::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let h = Self::assemble(
            memory_store(),
            FakeClipboard::denied(),
            clock,
            Box::new(player),
            export_dir,
        );
        (h, released)
    }

    fn assemble(
        store: Arc<dyn AppStore>,
        clipboard: FakeClipboard,
        clock: Arc<ManualClock>,
        player: Box<dyn PlayerBackend>,
        export_dir: &Path,
    ) -> Self {
        let dialog = Arc::new(ScriptedDialog::new(&[]));
        let controller =
            build_controller(&store, &dialog, &clock, clipboard, player, export_dir, "")
                .expect("controller");
        Self {
            clock,
            store,
            dialog,
            controller,
            out: Vec::new(),
        }
    }

    /// 1 行分のイベントを処理する
    pub fn send(&mut self, line: &str) -> Flow {
        let event = UiEvent::parse(line)
            .expect("parse")
            .expect("non-empty line");
        self.controller.handle(event, &mut self.out).expect("handle")
    }

    /// ここまでの出力を取り出す
    pub fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.out)).expect("utf8")
    }

    pub fn memo_texts(&self) -> Vec<String> {
        self.controller
            .state()
            .memos
            .rows()
            .iter()
            .map(|r| r.memo.text.clone())
            .collect()
    }
}

pub fn build_controller(
    store: &Arc<dyn AppStore>,
    dialog: &Arc<ScriptedDialog>,
    clock: &Arc<ManualClock>,
    clipboard: FakeClipboard,
    player: Box<dyn PlayerBackend>,
    export_dir: &Path,
    fragment: &str,
) -> Result<AppController, Error> {
    let dyn_clock: Arc<dyn Clock> = Arc::clone(clock) as Arc<dyn Clock>;
    let dyn_dialog: Arc<dyn Dialog> = Arc::clone(dialog) as Arc<dyn Dialog>;
    let log: Arc<dyn Log> = Arc::new(NoopLog);
    let ids: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&dyn_clock)));
    let parts = AppParts {
        store: Arc::clone(store),
        dialog: Arc::clone(&dyn_dialog),
        clipboard: Arc::new(clipboard),
        clock: Arc::clone(&dyn_clock),
        log: Arc::clone(&log),
        memo: MemoUseCase::new(Arc::clone(store), Arc::clone(&dyn_dialog), ids, Arc::clone(&log)),
        history: HistoryUseCase::new(
            Arc::clone(store),
            Arc::clone(&dyn_dialog),
            Arc::clone(&dyn_clock),
            Arc::clone(&log),
        ),
        backup: backup_use_case(store, dialog, clock),
        preferences: PreferencesUseCase::new(Arc::clone(store)),
        player: PlayerAdapter::new(player, 30.0),
        feedback_ms: FEEDBACK_MS,
        export_dir: export_dir.to_path_buf(),
    };
    AppController::load(parts, fragment)
}
