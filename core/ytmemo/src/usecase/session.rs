//! 対話セッションのイベントループ
//!
//! 入力行と Ctrl+C は 1 本のチャネルから届き、このループ（1 スレッド）だけが処理する。
//! quit・入力終了・Ctrl+C のいずれでもメモを書き戻してから終わる。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::io::Write;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use super::app::{AppController, Flow};
use crate::adapter::SessionInput;
use crate::domain::UiEvent;

/// Ctrl+C で終えたときの終了コード
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub struct SessionUseCase {
    log: Arc<dyn Log>,
}

impl SessionUseCase {
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self { log }
    }

    /// セッションを終了まで回す。`prompt` が true なら各行の前にプロンプトを出す。
    pub fn run(
        &self,
        controller: &mut AppController,
        input: &Arc<Mutex<Receiver<SessionInput>>>,
        out: &mut dyn Write,
        prompt: bool,
    ) -> Result<i32, Error> {
        loop {
            if prompt {
                write!(out, "ytmemo> ")?;
                out.flush()?;
            }
            // 受信後すぐにロックを外す（確認ダイアログが同じチャネルを読むため）
            let next = {
                let rx = input
                    .lock()
                    .map_err(|_| Error::system("input lock poisoned"))?;
                rx.recv()
            };
            let line = match next {
                Ok(SessionInput::Line(line)) => line,
                Ok(SessionInput::Interrupted) => {
                    writeln!(out)?;
                    controller.shutdown()?;
                    self.ended("interrupted");
                    return Ok(INTERRUPTED_EXIT_CODE);
                }
                Ok(SessionInput::Eof) | Err(_) => {
                    controller.shutdown()?;
                    self.ended("eof");
                    return Ok(0);
                }
            };
            let event = match UiEvent::parse(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };
            match controller.handle(event, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    self.ended("quit");
                    return Ok(0);
                }
                Err(e) => {
                    // 1 件の失敗ではセッションを止めない
                    eprintln!("ytmemo: {}", e);
                    let _ = self.log.log(
                        &LogRecord::new(LogLevel::Error, "usecase", "session", "event failed")
                            .field("error", e.to_string()),
                    );
                }
            }
        }
    }

    fn ended(&self, reason: &str) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "lifecycle", "session ended")
                .field("reason", reason),
        );
    }
}
