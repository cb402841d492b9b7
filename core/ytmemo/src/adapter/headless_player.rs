//! 端末ホスト用の PlayerBackend 実装
//!
//! 実際の映像は出さず、再生位置を時計から計算する。
//! 通知の出し方は埋め込みプレイヤーに合わせる（生成時に Ready、以降は状態変化のみ）。

use crate::ports::outbound::{PlayerBackend, PlayerEvent, PlayerOptions, PlayerState, VideoData};
use common::error::Error;
use common::ports::outbound::Clock;
use std::sync::Arc;

/// 埋め込みプレイヤーが提示する再生速度
pub const AVAILABLE_RATES: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

pub struct HeadlessPlayer {
    clock: Arc<dyn Clock>,
    duration: f64,
    options: Option<PlayerOptions>,
    video_id: Option<String>,
    state: PlayerState,
    /// anchor_ms 時点の再生位置
    anchor_pos: f64,
    anchor_ms: u64,
    rate: f64,
    events: Vec<PlayerEvent>,
}

impl HeadlessPlayer {
    pub fn new(clock: Arc<dyn Clock>, duration: f64) -> Self {
        Self {
            clock,
            duration,
            options: None,
            video_id: None,
            state: PlayerState::Unstarted,
            anchor_pos: 0.0,
            anchor_ms: 0,
            rate: 1.0,
            events: Vec::new(),
        }
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.state != state {
            self.state = state;
            self.events.push(PlayerEvent::StateChanged(state));
        }
    }

    fn reanchor(&mut self, pos: f64) {
        self.anchor_pos = pos.clamp(0.0, self.duration);
        self.anchor_ms = self.clock.now_ms();
    }

    fn cue(&mut self, video_id: &str) {
        self.video_id = Some(video_id.to_string());
        self.reanchor(0.0);
    }
}

impl PlayerBackend for HeadlessPlayer {
    fn create(&mut self, video_id: &str, options: &PlayerOptions) -> Result<(), Error> {
        if self.options.is_some() {
            return Err(Error::system("player already created"));
        }
        self.options = Some(options.clone());
        self.cue(video_id);
        self.events.push(PlayerEvent::Ready);
        Ok(())
    }

    fn load_video_by_id(&mut self, video_id: &str) -> Result<(), Error> {
        if self.options.is_none() {
            return Err(Error::system("player not created"));
        }
        self.cue(video_id);
        // 同じ状態のままだと通知が出ないので一度バッファ中を挟む
        self.set_state(PlayerState::Buffering);
        self.set_state(PlayerState::Playing);
        Ok(())
    }

    fn destroy(&mut self) {
        self.options = None;
        self.video_id = None;
        self.state = PlayerState::Unstarted;
        self.rate = 1.0;
        self.anchor_pos = 0.0;
        self.events.clear();
    }

    fn play(&mut self) {
        if self.video_id.is_none() {
            return;
        }
        let pos = self.current_time();
        self.reanchor(pos);
        self.set_state(PlayerState::Playing);
    }

    fn pause(&mut self) {
        if self.video_id.is_none() {
            return;
        }
        let pos = self.current_time();
        self.reanchor(pos);
        self.set_state(PlayerState::Paused);
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) {
        if self.video_id.is_some() && seconds.is_finite() {
            self.reanchor(seconds);
        }
    }

    fn current_time(&self) -> f64 {
        if self.state != PlayerState::Playing {
            return self.anchor_pos;
        }
        let elapsed = self.clock.now_ms().saturating_sub(self.anchor_ms) as f64 / 1000.0;
        (self.anchor_pos + elapsed * self.rate).min(self.duration)
    }

    fn duration(&self) -> f64 {
        if self.video_id.is_some() {
            self.duration
        } else {
            0.0
        }
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn available_playback_rates(&self) -> Vec<f64> {
        AVAILABLE_RATES.to_vec()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if !AVAILABLE_RATES.contains(&rate) {
            return;
        }
        let pos = self.current_time();
        self.reanchor(pos);
        self.rate = rate;
    }

    fn state(&self) -> PlayerState {
        self.state
    }

    fn video_data(&self) -> Option<VideoData> {
        self.video_id.as_ref().map(|id| VideoData {
            video_id: id.clone(),
            title: format!("YouTube video {}", id),
        })
    }

    fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }
}
