//! 対話セッションの 1 行 = 1 UI イベント
//!
//! ブラウザ版のクリック・キー入力・ナビゲーションに 1 対 1 で対応する。

use common::error::Error;
use std::path::PathBuf;

use super::memo::MemoId;
use super::preferences::Theme;
use super::router::{Page, SettingsSection};
use super::shortcut::KeyInput;
use super::video_id::VideoId;

/// フォーカス可能なテキスト入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Url,
    QuickMemo,
    HistorySearch,
    MemoEdit,
}

impl TextField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "url" => Some(TextField::Url),
            "memo" => Some(TextField::QuickMemo),
            "search" => Some(TextField::HistorySearch),
            "edit" => Some(TextField::MemoEdit),
            _ => None,
        }
    }
}

/// UI イベント
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// URL 欄に入力して読み込み
    LoadUrl(String),
    /// クリップボードの URL を貼り付けて読み込み
    PasteUrl,
    /// クイックメモ欄の内容を置き換える
    TypeQuickMemo(String),
    /// メモ追加ボタン
    AddMemo,
    Key(KeyInput),
    Focus(Option<TextField>),
    /// コマ送り（負で戻る）
    StepFrames(i32),
    /// メモのタイムスタンプをクリック
    SeekToMemo(MemoId),
    EnterEdit(MemoId),
    /// 編集中テキストエリアの内容を置き換える
    TypeDraft(String),
    /// 確定（本文を指定すれば下書きを置き換えてから確定）
    SaveEdit(Option<String>),
    CancelEdit,
    DeleteMemo(MemoId),
    Navigate(Page),
    SelectSettings(SettingsSection),
    SearchHistory(String),
    OpenHistory(VideoId),
    DeleteHistory(VideoId),
    SetTheme(Theme),
    ToggleSidebar,
    /// 出力先ディレクトリ（省略時は既定の出力先）
    Export(Option<PathBuf>),
    Import(PathBuf),
    Show,
    Help,
    Quit,
}

/// セッションで使えるイベントの一覧（help 表示用）
pub const SESSION_HELP: &str = "\
load <url>            Load a YouTube video by URL
paste                 Load the URL currently on the clipboard
input <text>          Replace the quick memo input
add                   Add the quick memo at the current playback time
key [ctrl+]<code>     Press a key (Space, ArrowLeft, KeyD, Digit3, KeyM, ...)
focus <url|memo|search|edit|none>
prev | next | frame <n>
seek <memo-id>        Jump to a memo's timestamp and play
edit <memo-id> | draft <text> | save [text] | cancel
delete <memo-id>      Delete a memo (asks for confirmation)
page <video|history|settings>
section <general|data>
search [query]        Filter the history by title
open <video-id>       Open a video from the history
forget <video-id>     Delete a history entry (asks for confirmation)
theme <light|dark> | sidebar
export [dir] | import <file>
show | help | quit";

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str, Error> {
    if arg.is_empty() {
        Err(Error::invalid_argument(format!("usage: {}", usage)))
    } else {
        Ok(arg)
    }
}

fn memo_id(arg: &str, usage: &str) -> Result<MemoId, Error> {
    required(arg, usage)?
        .parse()
        .map_err(|_| Error::invalid_argument(format!("invalid memo id: {}", arg)))
}

impl UiEvent {
    /// 1 行を解析する。空行は None。
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((n, r)) => (n, r.trim_start()),
            None => (trimmed, ""),
        };
        let arg = rest.trim();

        let event = match name {
            "load" => UiEvent::LoadUrl(required(arg, "load <url>")?.to_string()),
            "paste" => UiEvent::PasteUrl,
            // 前後の空白も入力として保持する（確定時に trim される）
            "input" => UiEvent::TypeQuickMemo(rest.to_string()),
            "add" => UiEvent::AddMemo,
            "key" => UiEvent::Key(KeyInput::parse(required(arg, "key [ctrl+]<code>")?)),
            "focus" => match arg {
                "none" | "" => UiEvent::Focus(None),
                f => UiEvent::Focus(Some(TextField::parse(f).ok_or_else(|| {
                    Error::invalid_argument(format!("unknown field: {}", f))
                })?)),
            },
            "prev" => UiEvent::StepFrames(-1),
            "next" => UiEvent::StepFrames(1),
            "frame" => UiEvent::StepFrames(
                required(arg, "frame <n>")?
                    .parse()
                    .map_err(|_| Error::invalid_argument(format!("invalid frame count: {}", arg)))?,
            ),
            "seek" => UiEvent::SeekToMemo(memo_id(arg, "seek <memo-id>")?),
            "edit" => UiEvent::EnterEdit(memo_id(arg, "edit <memo-id>")?),
            "draft" => UiEvent::TypeDraft(rest.to_string()),
            "save" => UiEvent::SaveEdit((!rest.is_empty()).then(|| rest.to_string())),
            "cancel" => UiEvent::CancelEdit,
            "delete" => UiEvent::DeleteMemo(memo_id(arg, "delete <memo-id>")?),
            "page" => UiEvent::Navigate(
                Page::parse(arg)
                    .ok_or_else(|| Error::invalid_argument("usage: page <video|history|settings>"))?,
            ),
            "section" => UiEvent::SelectSettings(
                SettingsSection::parse(arg)
                    .ok_or_else(|| Error::invalid_argument("usage: section <general|data>"))?,
            ),
            "search" => UiEvent::SearchHistory(arg.to_string()),
            "open" => UiEvent::OpenHistory(VideoId::new(required(arg, "open <video-id>")?)),
            "forget" => UiEvent::DeleteHistory(VideoId::new(required(arg, "forget <video-id>")?)),
            "theme" => UiEvent::SetTheme(
                Theme::parse(arg)
                    .ok_or_else(|| Error::invalid_argument("usage: theme <light|dark>"))?,
            ),
            "sidebar" => UiEvent::ToggleSidebar,
            "export" => UiEvent::Export((!arg.is_empty()).then(|| PathBuf::from(arg))),
            "import" => UiEvent::Import(PathBuf::from(required(arg, "import <file>")?)),
            "show" => UiEvent::Show,
            "help" | "?" => UiEvent::Help,
            "quit" | "exit" => UiEvent::Quit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command: {} (type 'help')",
                    other
                )))
            }
        };
        Ok(Some(event))
    }
}
