//! 外部コマンド（wl-paste / xclip / pbpaste）でクリップボードを読む Clipboard 実装

use crate::ports::outbound::Clipboard;
use common::error::Error;
use std::process::{Command, Stdio};

/// 試すコマンド（先頭から順に、最初に成功したものを使う）
const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["wl-paste", "--no-newline"],
    &["xclip", "-o", "-selection", "clipboard"],
    &["pbpaste"],
];

pub struct CommandClipboard {
    commands: Vec<Vec<String>>,
}

impl CommandClipboard {
    pub fn new() -> Self {
        Self::with_commands(
            DEFAULT_COMMANDS
                .iter()
                .map(|c| c.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    pub fn with_commands(commands: Vec<Vec<String>>) -> Self {
        Self { commands }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for CommandClipboard {
    fn read_text(&self) -> Result<String, Error> {
        let mut last_err = String::from("no clipboard command configured");
        for argv in &self.commands {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            let output = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output();
            match output {
                Ok(out) if out.status.success() => {
                    return Ok(String::from_utf8_lossy(&out.stdout).into_owned());
                }
                Ok(out) => {
                    last_err = format!("'{}' exited with {}", program, out.status);
                }
                Err(e) => {
                    last_err = format!("Failed to execute '{}': {}", program, e);
                }
            }
        }
        Err(Error::io_msg(last_err))
    }
}
