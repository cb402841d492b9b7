//! 埋め込みプレイヤーの操作
//!
//! 初回はプレイヤーを生成し、以降は同じプレイヤーで動画を差し替える。
//! バックエンドの通知（Ready / Playing）を「動画が読み込まれた」という報告に変換する。

use common::error::Error;

use crate::domain::shortcut::{next_rate, RateStep};
use crate::domain::VideoId;
use crate::ports::outbound::{PlayerBackend, PlayerEvent, PlayerOptions, PlayerState, VideoData};

pub struct PlayerAdapter {
    backend: Box<dyn PlayerBackend>,
    created: bool,
    frame_rate: f64,
}

impl PlayerAdapter {
    pub fn new(backend: Box<dyn PlayerBackend>, frame_rate: f64) -> Self {
        Self {
            backend,
            created: false,
            frame_rate,
        }
    }

    /// 動画を読み込む（初回は自動再生・インライン・関連動画なしで生成）
    pub fn load(&mut self, id: &VideoId) -> Result<(), Error> {
        if self.created {
            self.backend.load_video_by_id(id.as_str())
        } else {
            self.backend.create(id.as_str(), &PlayerOptions::default())?;
            self.created = true;
            Ok(())
        }
    }

    /// プレイヤーを破棄して未生成に戻す（ページ再読み込み相当）
    pub fn reset(&mut self) {
        if self.created {
            self.backend.destroy();
            self.created = false;
        }
    }

    /// 溜まった通知を処理し、上位へ報告すべき動画情報を返す。
    ///
    /// Ready では再生を開始してから報告する。再生開始で出る通知も同じ呼び出しで処理する。
    pub fn poll(&mut self) -> Vec<VideoData> {
        let mut reports = Vec::new();
        loop {
            let events = self.backend.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                match event {
                    PlayerEvent::Ready => {
                        self.backend.play();
                        reports.extend(self.backend.video_data());
                    }
                    PlayerEvent::StateChanged(PlayerState::Playing) => {
                        reports.extend(self.backend.video_data());
                    }
                    PlayerEvent::StateChanged(_) => {}
                }
            }
        }
        reports
    }

    /// 再生中なら一時停止、それ以外なら再生
    pub fn toggle_play(&mut self) {
        if !self.created {
            return;
        }
        if self.backend.state() == PlayerState::Playing {
            self.backend.pause();
        } else {
            self.backend.play();
        }
    }

    pub fn play(&mut self) {
        if self.created {
            self.backend.play();
        }
    }

    pub fn pause(&mut self) {
        if self.created {
            self.backend.pause();
        }
    }

    pub fn seek_to(&mut self, seconds: f64) {
        if self.created {
            self.backend.seek_to(seconds, true);
        }
    }

    /// 現在位置から delta 秒シーク（再生状態は変えない）
    pub fn seek_by(&mut self, delta: f64) {
        if self.created {
            let t = self.backend.current_time() + delta;
            self.backend.seek_to(t, true);
        }
    }

    /// 一時停止してからフレーム単位で移動する
    pub fn seek_by_frames(&mut self, frames: i32) {
        if !self.created {
            return;
        }
        self.backend.pause();
        let t = self.backend.current_time() + f64::from(frames) / self.frame_rate;
        self.backend.seek_to(t, true);
    }

    /// 速度リスト上で 1 段階変える。変えた場合は新しい速度。
    pub fn step_rate(&mut self, step: RateStep) -> Option<f64> {
        if !self.created {
            return None;
        }
        let rates = self.backend.available_playback_rates();
        let rate = next_rate(&rates, self.backend.playback_rate(), step)?;
        self.backend.set_playback_rate(rate);
        Some(rate)
    }

    /// 動画全体の n/10 へ移動する。長さが取れない場合は false。
    pub fn jump_to_decile(&mut self, n: u8) -> bool {
        if !self.created {
            return false;
        }
        let duration = self.backend.duration();
        if duration <= 0.0 {
            return false;
        }
        self.backend.seek_to(duration * f64::from(n) / 10.0, true);
        true
    }

    /// プレイヤーがあれば現在位置
    pub fn current_time(&self) -> Option<f64> {
        self.created.then(|| self.backend.current_time())
    }

    pub fn state(&self) -> Option<PlayerState> {
        self.created.then(|| self.backend.state())
    }

    pub fn playback_rate(&self) -> Option<f64> {
        self.created.then(|| self.backend.playback_rate())
    }

    pub fn duration(&self) -> Option<f64> {
        self.created.then(|| self.backend.duration())
    }
}
