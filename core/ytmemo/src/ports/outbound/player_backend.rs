//! 埋め込みプレイヤー Outbound ポート
//!
//! 実際の再生はすべてバックエンドに委ねる。アプリは制御メソッドを呼び、
//! 状態通知（Ready / StateChanged）を `take_events` で受け取る。

use common::error::Error;

/// プレイヤーの状態（IFrame API の数値コードに対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    /// -1 / 0 / 1 / 2 / 3 / 5
    pub fn code(&self) -> i32 {
        match self {
            PlayerState::Unstarted => -1,
            PlayerState::Ended => 0,
            PlayerState::Playing => 1,
            PlayerState::Paused => 2,
            PlayerState::Buffering => 3,
            PlayerState::Cued => 5,
        }
    }
}

/// プレイヤー生成時のオプション
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    pub width: u32,
    pub height: u32,
    pub autoplay: bool,
    pub playsinline: bool,
    /// 関連動画を表示するか
    pub related: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            autoplay: true,
            playsinline: true,
            related: false,
        }
    }
}

/// 読み込み済み動画の情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoData {
    pub video_id: String,
    pub title: String,
}

/// バックエンドからの通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Ready,
    StateChanged(PlayerState),
}

pub trait PlayerBackend: Send {
    /// プレイヤーを生成して動画を読み込む（初回のみ呼ばれる）
    fn create(&mut self, video_id: &str, options: &PlayerOptions) -> Result<(), Error>;
    /// 生成済みプレイヤーで別の動画を読み込む
    fn load_video_by_id(&mut self, video_id: &str) -> Result<(), Error>;
    /// プレイヤーを破棄する。以降は create からやり直す。
    fn destroy(&mut self);

    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn playback_rate(&self) -> f64;
    fn available_playback_rates(&self) -> Vec<f64>;
    fn set_playback_rate(&mut self, rate: f64);
    fn state(&self) -> PlayerState;
    fn video_data(&self) -> Option<VideoData>;

    /// 溜まった通知を発生順に取り出す
    fn take_events(&mut self) -> Vec<PlayerEvent>;
}
