//! 画面全体のコントローラ
//!
//! UI イベントを 1 件ずつ受け取り、AppState を各 usecase で更新する。
//! イベント処理のあとにプレイヤーの通知を取り込み、読み込み完了を反映する。

use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::backup::{BackupUseCase, ImportOutcome};
use super::history::HistoryUseCase;
use super::memo::MemoUseCase;
use super::player::PlayerAdapter;
use super::preferences::PreferencesUseCase;
use super::state::AppState;
use crate::domain::render::{history_list_text, memo_list_text};
use crate::domain::shortcut::{self, decile_label, rate_label, Shortcut};
use crate::domain::time::format_time;
use crate::domain::ui_event::SESSION_HELP;
use crate::domain::{Page, SettingsSection, TextField, UiEvent, UserError, VideoId};
use crate::ports::outbound::{AppStore, Clipboard, Dialog, PlayerState, VideoData};

/// イベント処理後にセッションを続けるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// AppController が使う usecase とポート
pub struct AppParts {
    pub store: Arc<dyn AppStore>,
    pub dialog: Arc<dyn Dialog>,
    pub clipboard: Arc<dyn Clipboard>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
    pub memo: MemoUseCase,
    pub history: HistoryUseCase,
    pub backup: BackupUseCase,
    pub preferences: PreferencesUseCase,
    pub player: PlayerAdapter,
    pub feedback_ms: u64,
    /// export でディレクトリを省略したときの出力先
    pub export_dir: PathBuf,
}

pub struct AppController {
    state: AppState,
    parts: AppParts,
}

fn player_state_label(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Unstarted => "unstarted",
        PlayerState::Ended => "ended",
        PlayerState::Playing => "playing",
        PlayerState::Paused => "paused",
        PlayerState::Buffering => "buffering",
        PlayerState::Cued => "cued",
    }
}

fn on_off(b: bool) -> &'static str {
    if b {
        "on"
    } else {
        "off"
    }
}

impl AppController {
    /// ストアから状態を読み込んで組み立てる
    pub fn load(parts: AppParts, fragment: &str) -> Result<Self, Error> {
        let state = AppState::load(&*parts.store, fragment)?;
        Ok(Self { state, parts })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// イベントを 1 件処理する。表示は out へ書く。
    pub fn handle(&mut self, event: UiEvent, out: &mut dyn Write) -> Result<Flow, Error> {
        let flow = self.dispatch(event, out)?;
        self.pump()?;
        Ok(flow)
    }

    /// 終了時（quit / 入力終了 / Ctrl+C）: 未保存のメモを書き戻す
    pub fn shutdown(&mut self) -> Result<(), Error> {
        self.parts.memo.flush(&mut self.state)?;
        Ok(())
    }

    fn dispatch(&mut self, event: UiEvent, out: &mut dyn Write) -> Result<Flow, Error> {
        match event {
            UiEvent::LoadUrl(url) => self.load_url(&url)?,
            UiEvent::PasteUrl => match self.parts.clipboard.read_text() {
                Ok(text) => self.load_url(text.trim())?,
                Err(e) => self
                    .parts
                    .dialog
                    .alert(&UserError::ClipboardUnavailable(e.to_string()).to_string()),
            },
            UiEvent::TypeQuickMemo(text) => self.state.quick_memo = text,
            UiEvent::AddMemo => self.commit_quick_memo(out)?,
            UiEvent::Key(input) => {
                if let Some(s) = shortcut::resolve(input, self.state.text_field_focused()) {
                    self.run_shortcut(s, out)?;
                }
            }
            UiEvent::Focus(field) => self.state.focus = field,
            UiEvent::StepFrames(n) => {
                if self.state.controls.frame_step {
                    self.parts.player.seek_by_frames(n);
                } else {
                    writeln!(out, "Frame controls are disabled until a video is ready.")?;
                }
            }
            UiEvent::SeekToMemo(id) => {
                if let Some(memo) = self.state.memos.get(id) {
                    let time = memo.time;
                    self.parts.player.seek_to(time);
                    self.parts.player.play();
                }
            }
            UiEvent::EnterEdit(id) => {
                if self.parts.memo.enter_edit(&mut self.state, id) {
                    self.state.focus = Some(TextField::MemoEdit);
                } else {
                    writeln!(out, "No memo with id {}.", id)?;
                }
            }
            UiEvent::TypeDraft(text) => {
                if !self.state.memos.set_draft(&text) {
                    writeln!(out, "No memo is being edited.")?;
                }
            }
            UiEvent::SaveEdit(text) => {
                if let Some(text) = text {
                    self.state.memos.set_draft(&text);
                }
                match self.state.memos.editing().map(|(id, d)| (id, d.to_string())) {
                    Some((id, draft)) => {
                        self.parts.memo.edit(&mut self.state, id, &draft)?;
                        self.leave_edit_focus();
                    }
                    None => writeln!(out, "No memo is being edited.")?,
                }
            }
            UiEvent::CancelEdit => {
                self.parts.memo.cancel_edit(&mut self.state);
                self.leave_edit_focus();
            }
            UiEvent::DeleteMemo(id) => {
                if self.parts.memo.delete(&mut self.state, id)? {
                    self.leave_edit_focus();
                }
            }
            UiEvent::Navigate(page) => {
                if self.state.router.navigate(page) {
                    self.write_history(out)?;
                }
            }
            UiEvent::SelectSettings(section) => self.state.router.select_settings_section(section),
            UiEvent::SearchHistory(query) => {
                self.state.history_query = query;
                self.write_history(out)?;
            }
            UiEvent::OpenHistory(id) => {
                self.state.router.navigate(Page::Video);
                self.state.url_input = id.watch_url();
                self.load_video(&id)?;
            }
            UiEvent::DeleteHistory(id) => {
                if self.parts.history.delete(&mut self.state, &id)? {
                    self.write_history(out)?;
                }
            }
            UiEvent::SetTheme(theme) => {
                self.parts.preferences.set_theme(&mut self.state.preferences, theme)?
            }
            UiEvent::ToggleSidebar => {
                self.parts
                    .preferences
                    .toggle_sidebar(&mut self.state.preferences)?;
            }
            UiEvent::Export(dir) => {
                let dir = dir.unwrap_or_else(|| self.parts.export_dir.clone());
                if let Some(path) = self.parts.backup.export(&dir)? {
                    writeln!(out, "Exported to {}", path.display())?;
                }
            }
            UiEvent::Import(path) => self.import(&path)?,
            UiEvent::Show => self.write_view(out)?,
            UiEvent::Help => writeln!(out, "{}", SESSION_HELP)?,
            UiEvent::Quit => {
                self.shutdown()?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn leave_edit_focus(&mut self) {
        if self.state.focus == Some(TextField::MemoEdit) {
            self.state.focus = None;
        }
    }

    /// URL 欄の内容で読み込む。動画 ID が取れなければアラートのみ。
    fn load_url(&mut self, url: &str) -> Result<(), Error> {
        self.state.url_input = url.to_string();
        match VideoId::from_url(url) {
            Some(id) => self.load_video(&id),
            None => {
                self.parts.dialog.alert(&UserError::InvalidUrl.to_string());
                Ok(())
            }
        }
    }

    fn load_video(&mut self, id: &VideoId) -> Result<(), Error> {
        self.parts.memo.switch_video(&mut self.state, id)?;
        self.state.controls.frame_step = false;
        self.parts.player.load(id)?;
        let _ = self.parts.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "player", "video loading")
                .field("video_id", id.as_str()),
        );
        Ok(())
    }

    /// プレイヤーはあるが読み込み完了前なら、追加ボタンは無効のまま
    fn commit_quick_memo(&mut self, out: &mut dyn Write) -> Result<(), Error> {
        let time = self.parts.player.current_time();
        if time.is_some() && !self.state.controls.add_memo {
            writeln!(out, "Add memo is disabled until a video is ready.")?;
            return Ok(());
        }
        let text = self.state.quick_memo.clone();
        self.parts.memo.add(&mut self.state, &text, time)?;
        Ok(())
    }

    fn run_shortcut(&mut self, s: Shortcut, out: &mut dyn Write) -> Result<(), Error> {
        let now = self.parts.clock.now_ms();
        match s {
            Shortcut::TogglePlay => self.parts.player.toggle_play(),
            Shortcut::Seek { delta } => self.parts.player.seek_by(delta),
            Shortcut::StepRate(step) => {
                if let Some(rate) = self.parts.player.step_rate(step) {
                    self.state
                        .feedback
                        .show(rate_label(rate), now, self.parts.feedback_ms);
                }
            }
            Shortcut::JumpToDecile(n) => {
                if self.parts.player.jump_to_decile(n) {
                    self.state
                        .feedback
                        .show(decile_label(n), now, self.parts.feedback_ms);
                }
            }
            Shortcut::CommitQuickMemo => self.commit_quick_memo(out)?,
        }
        Ok(())
    }

    /// インポート成功時はプレイヤーを破棄し、ストアから状態を読み直す（ページの再読み込み相当）
    fn import(&mut self, path: &Path) -> Result<(), Error> {
        if let ImportOutcome::Imported { .. } = self.parts.backup.import(path)? {
            let location = self.state.router.location().to_string();
            self.parts.player.reset();
            self.state = AppState::load(&*self.parts.store, &location)?;
        }
        Ok(())
    }

    /// プレイヤーの報告を反映する
    fn pump(&mut self) -> Result<(), Error> {
        for data in self.parts.player.poll() {
            self.on_video_ready(data)?;
        }
        Ok(())
    }

    /// 読み込み完了: 現在の動画を確定し、ボタンを有効化して履歴に記録する
    fn on_video_ready(&mut self, data: VideoData) -> Result<(), Error> {
        let id = VideoId::new(data.video_id);
        if self.state.current_video.as_ref() != Some(&id) {
            self.parts.memo.switch_video(&mut self.state, &id)?;
        }
        self.state.current_title = Some(data.title.clone());
        self.state.controls.add_memo = true;
        self.state.controls.frame_step = true;
        self.parts.history.touch(&mut self.state, &id, &data.title)?;
        self.parts.memo.flush(&mut self.state)?;
        Ok(())
    }

    fn write_history(&self, out: &mut dyn Write) -> Result<(), Error> {
        let entries = self.parts.history.search(&self.state, &self.state.history_query);
        write!(out, "{}", history_list_text(&entries))?;
        Ok(())
    }

    /// 現在のページを描画する
    pub fn write_view(&self, out: &mut dyn Write) -> Result<(), Error> {
        let state = &self.state;
        let (icon, tooltip) = state.preferences.sidebar_toggle_label();
        writeln!(
            out,
            "[{}] theme: {}  sidebar: {} ({})",
            state.router.page(),
            state.preferences.theme,
            icon,
            tooltip
        )?;
        if let Some(text) = state.feedback.visible_text(self.parts.clock.now_ms()) {
            writeln!(out, "feedback: {}", text)?;
        }
        match state.router.page() {
            Page::Video => {
                match &state.current_video {
                    Some(id) => {
                        let title = state.current_title.as_deref().unwrap_or("(loading)");
                        let time = self.parts.player.current_time().unwrap_or(0.0);
                        let player_state = self
                            .parts
                            .player
                            .state()
                            .map(player_state_label)
                            .unwrap_or("none");
                        let rate = self.parts.player.playback_rate().unwrap_or(1.0);
                        writeln!(
                            out,
                            "video: {} {}  {} {} {}",
                            id,
                            title,
                            format_time(time),
                            player_state,
                            rate_label(rate)
                        )?;
                    }
                    None => writeln!(out, "video: (none)")?,
                }
                writeln!(
                    out,
                    "controls: add memo {}, frame step {}",
                    on_off(state.controls.add_memo),
                    on_off(state.controls.frame_step)
                )?;
                if !state.quick_memo.is_empty() {
                    writeln!(out, "quick memo: {}", state.quick_memo)?;
                }
                write!(out, "{}", memo_list_text(state.memos.rows()))?;
            }
            Page::History => self.write_history(out)?,
            Page::Settings => match state.router.settings_section() {
                SettingsSection::General => {
                    writeln!(out, "theme: {} (theme light|dark)", state.preferences.theme)?;
                    writeln!(out, "sidebar: {} (sidebar)", tooltip)?;
                }
                SettingsSection::Data => {
                    writeln!(out, "export [dir]   Save all history and memos to a backup file")?;
                    writeln!(out, "import <file>  Replace all history and memos from a backup file")?;
                }
            },
        }
        Ok(())
    }
}
