//! 対話セッションの入力源
//!
//! 標準入力の読み取りスレッドと Ctrl+C ハンドラが、どちらも同じチャネルへ送る。
//! 受け取り側（セッションのループ）は 1 スレッドだけ。

use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// セッションへの入力 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// 標準入力の終端
    Eof,
}

/// 読み取りスレッドを起動し、Ctrl+C ハンドラを登録する。
///
/// ハンドラ登録に失敗した場合（同一プロセスで 2 回目など）は警告ログだけ残して続行する。
pub fn spawn_console_input(log: Arc<dyn Log>) -> Receiver<SessionInput> {
    let (tx, rx) = mpsc::channel();

    let sigint_tx = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = sigint_tx.send(SessionInput::Interrupted);
    }) {
        let _ = log.log(
            &LogRecord::new(LogLevel::Warn, "adapter", "lifecycle", "Ctrl+C handler not installed")
                .field("error", e.to_string()),
        );
    }

    thread::spawn(move || read_lines(std::io::stdin().lock(), tx));
    rx
}

/// 1 行ずつ送り、終端（または読み取りエラー）で Eof を送る
fn read_lines(reader: impl BufRead, tx: Sender<SessionInput>) {
    for line in reader.lines() {
        match line {
            Ok(l) => {
                if tx.send(SessionInput::Line(l)).is_err() {
                    return;
                }
            }
            Err(_) => break,
        }
    }
    let _ = tx.send(SessionInput::Eof);
}
