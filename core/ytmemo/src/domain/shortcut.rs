//! キーボードショートカット
//!
//! キーは DOM の `KeyboardEvent.code` 名で表す（"Space", "ArrowLeft", "KeyA", "Digit1", "Numpad1" …）。
//! テキスト入力欄にフォーカスがある間はすべて無効。

/// 通常のシーク量（秒）
pub const SEEK_STEP_SECS: f64 = 1.0;
/// Ctrl 併用時のシーク量（秒）
pub const SEEK_STEP_WITH_MODIFIER_SECS: f64 = 5.0;

/// ショートカットに関係するキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyA,
    KeyD,
    KeyW,
    KeyS,
    KeyM,
    /// Digit0-9
    Digit(u8),
    /// Numpad0-9
    Numpad(u8),
    /// それ以外（何もしない）
    Other,
}

impl KeyCode {
    /// `KeyboardEvent.code` 名から読む。短縮名（left / a / 1 等）も受け付ける。
    pub fn parse(code: &str) -> Self {
        match code {
            "Space" | "space" => KeyCode::Space,
            "ArrowLeft" | "left" => KeyCode::ArrowLeft,
            "ArrowRight" | "right" => KeyCode::ArrowRight,
            "ArrowUp" | "up" => KeyCode::ArrowUp,
            "ArrowDown" | "down" => KeyCode::ArrowDown,
            "KeyA" | "a" | "A" => KeyCode::KeyA,
            "KeyD" | "d" | "D" => KeyCode::KeyD,
            "KeyW" | "w" | "W" => KeyCode::KeyW,
            "KeyS" | "s" | "S" => KeyCode::KeyS,
            "KeyM" | "m" | "M" => KeyCode::KeyM,
            _ => {
                if let Some(n) = single_digit(code.strip_prefix("Digit").unwrap_or(code)) {
                    KeyCode::Digit(n)
                } else if let Some(n) = code.strip_prefix("Numpad").and_then(single_digit) {
                    KeyCode::Numpad(n)
                } else {
                    KeyCode::Other
                }
            }
        }
    }
}

fn single_digit(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

/// 修飾キーつきのキー入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true }
    }

    /// `ctrl+ArrowRight` / `ArrowRight` 形式
    pub fn parse(s: &str) -> Self {
        match s.split_once('+') {
            Some((modifier, code)) if modifier.eq_ignore_ascii_case("ctrl") => {
                Self::with_ctrl(KeyCode::parse(code))
            }
            _ => Self::new(KeyCode::parse(s)),
        }
    }
}

/// 再生速度の上げ下げ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStep {
    Up,
    Down,
}

/// ショートカットで起きる操作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    /// 再生中なら一時停止、それ以外なら再生
    TogglePlay,
    /// 現在位置から delta 秒シーク
    Seek { delta: f64 },
    /// 利用可能な再生速度リスト上で 1 段階移動
    StepRate(RateStep),
    /// 動画全体の n/10 の位置へ（n = 1..=9）
    JumpToDecile(u8),
    /// クイックメモ入力を確定
    CommitQuickMemo,
}

/// キー入力をショートカットに解決する。入力欄にフォーカスがあれば None。
pub fn resolve(input: KeyInput, text_field_focused: bool) -> Option<Shortcut> {
    if text_field_focused {
        return None;
    }
    let step = if input.ctrl {
        SEEK_STEP_WITH_MODIFIER_SECS
    } else {
        SEEK_STEP_SECS
    };
    match input.code {
        KeyCode::Space => Some(Shortcut::TogglePlay),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Shortcut::Seek { delta: -step }),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Shortcut::Seek { delta: step }),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Shortcut::StepRate(RateStep::Up)),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Shortcut::StepRate(RateStep::Down)),
        KeyCode::Digit(n) | KeyCode::Numpad(n) if (1..=9).contains(&n) => {
            Some(Shortcut::JumpToDecile(n))
        }
        KeyCode::KeyM => Some(Shortcut::CommitQuickMemo),
        _ => None,
    }
}

/// 利用可能な速度リスト上で次の速度を選ぶ。端に達していれば None。
///
/// 現在の速度がリストに無い場合、Up は先頭を選び Down は何もしない。
pub fn next_rate(available: &[f64], current: f64, step: RateStep) -> Option<f64> {
    let index = available.iter().position(|r| *r == current);
    match step {
        RateStep::Up => {
            let next = index.map_or(0, |i| i + 1);
            available.get(next).copied()
        }
        RateStep::Down => match index {
            Some(i) if i > 0 => available.get(i - 1).copied(),
            _ => None,
        },
    }
}

/// 速度変更時のフィードバック表示（2 → "2x", 1.5 → "1.5x"）
pub fn rate_label(rate: f64) -> String {
    format!("{}x", rate)
}

/// 割合ジャンプ時のフィードバック表示（3 → "30%"）
pub fn decile_label(n: u8) -> String {
    format!("{}%", u32::from(n) * 10)
}
