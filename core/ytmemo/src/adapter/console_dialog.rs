//! 端末上の Dialog 実装
//!
//! alert は stderr に出す。confirm は `[y/N]` を尋ね、y / yes のときだけ true。
//! `-y/--yes` 指定時は尋ねずに true を返す。

use crate::domain::Confirmation;
use crate::ports::outbound::Dialog;
use common::error::Error;
use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use super::console_input::SessionInput;

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn prompt(question: &Confirmation) {
    eprint!("{} [y/N] ", question);
    let _ = std::io::stderr().flush();
}

/// 単発コマンド用。標準入力から直接 1 行読む。
pub struct ConsoleDialog {
    assume_yes: bool,
}

impl ConsoleDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for ConsoleDialog {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn confirm(&self, question: &Confirmation) -> Result<bool, Error> {
        if self.assume_yes {
            return Ok(true);
        }
        prompt(question);
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read answer: {}", e)))?;
        Ok(is_yes(&line))
    }
}

/// 対話セッション用。入力はセッションと同じチャネルから受け取る
/// （標準入力の読み取りスレッドは 1 本だけ）。
pub struct SessionDialog {
    input: Arc<Mutex<Receiver<SessionInput>>>,
    assume_yes: bool,
}

impl SessionDialog {
    pub fn new(input: Arc<Mutex<Receiver<SessionInput>>>, assume_yes: bool) -> Self {
        Self { input, assume_yes }
    }
}

impl Dialog for SessionDialog {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn confirm(&self, question: &Confirmation) -> Result<bool, Error> {
        if self.assume_yes {
            return Ok(true);
        }
        prompt(question);
        let rx = self
            .input
            .lock()
            .map_err(|_| Error::system("input lock poisoned"))?;
        // 割り込み・入力終了は「いいえ」
        match rx.recv() {
            Ok(SessionInput::Line(line)) => Ok(is_yes(&line)),
            Ok(SessionInput::Interrupted) | Ok(SessionInput::Eof) | Err(_) => {
                eprintln!();
                Ok(false)
            }
        }
    }
}
