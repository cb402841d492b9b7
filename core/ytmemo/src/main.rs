mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};

use adapter::{spawn_console_input, CommandClipboard, ConsoleDialog, SessionDialog};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use domain::command::Command;
use domain::render::{history_list_html, history_list_text, memo_list_html, memo_list_text};
use domain::{MemoBoard, Page, VideoId};
use ports::inbound::UseCaseRunner;
use ports::outbound::Dialog;
use usecase::{AppState, ImportOutcome, SessionUseCase};
use wiring::{wire_ytmemo, App};

/// export で出力先を省略したときはカレントディレクトリ
const DEFAULT_EXPORT_DIR: &str = ".";

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let command = config_to_command(&config);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .field("command", command.name())
                .field("mutating", command.is_mutating()),
        );
        let name = command.name();
        let result = self.dispatch(command, config.assume_yes);
        let record = match &result {
            Ok(code) => LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("command", name)
                .field("exit_code", *code),
            Err(e) => LogRecord::new(LogLevel::Error, "cli", "lifecycle", "command failed")
                .field("command", name)
                .field("error", e.to_string()),
        };
        let _ = self.app.logger.log(&record);
        result
    }
}

impl Runner {
    fn dispatch(&self, command: Command, assume_yes: bool) -> Result<i32, Error> {
        let console_dialog = || Arc::new(ConsoleDialog::new(assume_yes)) as Arc<dyn Dialog>;
        match command {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Version => {
                println!("ytmemo {}", env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
            Command::Session { page } => self.run_session(page, assume_yes),
            Command::HistoryList => {
                let history = self.app.store.load_history()?;
                let entries: Vec<_> = history.entries().iter().collect();
                print!("{}", history_list_text(&entries));
                Ok(0)
            }
            Command::HistorySearch { query } => {
                let state = AppState::load(&*self.app.store, "")?;
                let entries = self
                    .app
                    .history_use_case(console_dialog())
                    .search(&state, &query);
                print!("{}", history_list_text(&entries));
                Ok(0)
            }
            Command::HistoryRender => {
                let history = self.app.store.load_history()?;
                let entries: Vec<_> = history.entries().iter().collect();
                println!("{}", history_list_html(&entries));
                Ok(0)
            }
            Command::HistoryDelete { id } => {
                let mut state = AppState::load(&*self.app.store, "")?;
                if state.history.find(&id).is_none() {
                    return Err(Error::invalid_argument(format!("No history entry for {}", id)));
                }
                if self
                    .app
                    .history_use_case(console_dialog())
                    .delete(&mut state, &id)?
                {
                    println!("Deleted {}", id);
                }
                Ok(0)
            }
            Command::MemoList { id } => {
                let board = self.memo_board(&id)?;
                print!("{}", memo_list_text(board.rows()));
                Ok(0)
            }
            Command::MemoRender { id } => {
                let board = self.memo_board(&id)?;
                println!("{}", memo_list_html(board.rows()));
                Ok(0)
            }
            Command::Export { out_dir } => {
                let dir = out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
                match self.app.backup_use_case(console_dialog()).export(&dir)? {
                    Some(path) => {
                        println!("{}", path.display());
                        Ok(0)
                    }
                    None => Ok(1),
                }
            }
            Command::Import { file } => {
                match self.app.backup_use_case(console_dialog()).import(&file)? {
                    ImportOutcome::Imported { .. } | ImportOutcome::Declined => Ok(0),
                    ImportOutcome::Rejected => Ok(1),
                }
            }
            Command::Theme { theme } => {
                let mut state = AppState::load(&*self.app.store, "")?;
                if let Some(theme) = theme {
                    self.app
                        .preferences_use_case()
                        .set_theme(&mut state.preferences, theme)?;
                }
                println!("{}", state.preferences.theme);
                Ok(0)
            }
            Command::Sidebar { toggle } => {
                let mut state = AppState::load(&*self.app.store, "")?;
                if toggle {
                    self.app
                        .preferences_use_case()
                        .toggle_sidebar(&mut state.preferences)?;
                }
                let (icon, tooltip) = state.preferences.sidebar_toggle_label();
                let label = if state.preferences.sidebar_collapsed {
                    "collapsed"
                } else {
                    "expanded"
                };
                println!("{} {} ({})", label, icon, tooltip);
                Ok(0)
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "Unknown command or arguments: '{}'",
                name
            ))),
        }
    }

    fn memo_board(&self, id: &VideoId) -> Result<MemoBoard, Error> {
        let history = self.app.store.load_history()?;
        let entry = history
            .find(id)
            .ok_or_else(|| Error::invalid_argument(format!("No history entry for {}", id)))?;
        Ok(MemoBoard::from_memos(entry.memos.clone()))
    }

    fn run_session(&self, page: Option<Page>, assume_yes: bool) -> Result<i32, Error> {
        let input = Arc::new(Mutex::new(spawn_console_input(Arc::clone(&self.app.logger))));
        let dialog = Arc::new(SessionDialog::new(Arc::clone(&input), assume_yes));
        let fragment = page.map(|p| p.fragment()).unwrap_or("");
        let mut controller = self.app.app_controller(
            dialog,
            Arc::new(CommandClipboard::new()),
            self.app.headless_player(),
            PathBuf::from(DEFAULT_EXPORT_DIR),
            fragment,
        )?;
        let interactive = io::stdin().is_terminal();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if interactive {
            writeln!(out, "ytmemo session. Type 'help' for commands, 'quit' to exit.")?;
            controller.write_view(&mut out)?;
        }
        SessionUseCase::new(Arc::clone(&self.app.logger)).run(
            &mut controller,
            &input,
            &mut out,
            interactive,
        )
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ytmemo: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: ytmemo [-h] [-d|--home-dir directory] [-y|--yes] [<command> [args...]]");
}

fn print_help() {
    println!("Usage: ytmemo [-h] [-d|--home-dir directory] [-y|--yes] [<command> [args...]]");
    println!("  -h, --help            Display this help message.");
    println!("  -d, --home-dir        Specify a home directory (sets YTMEMO_HOME for this process).");
    println!("  -y, --yes             Answer yes to every confirmation.");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!("  <command>             Command to execute. Omit to start the interactive session.");
    println!();
    println!("Environment:");
    println!("  YTMEMO_HOME      Home directory (config/, data/, state/ under it). Default: XDG directories.");
    println!("  YTMEMO_LOG_FILE  Structured log file. Default: $XDG_STATE_HOME/ytmemo/logs/ytmemo.jsonl.");
    println!();
    println!("Commands:");
    println!("  session [video|history|settings]   Start the interactive session (default).");
    println!("  history [list]                     List the viewing history.");
    println!("  history search <query>             Filter the history by title.");
    println!("  history render                     Render the history as HTML.");
    println!("  history delete <video-id>          Delete a history entry and its memos.");
    println!("  memo list <video-id>               List the memos of a video.");
    println!("  memo render <video-id>             Render the memos of a video as HTML.");
    println!("  export [--out directory]           Write a backup file (yt-memo-backup-*.json).");
    println!("  import <file>                      Replace all history and memos from a backup file.");
    println!("  theme [light|dark]                 Show or set the theme.");
    println!("  sidebar [toggle]                   Show or toggle the sidebar state.");
    println!("  version                            Print the version.");
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // -d/--home-dir 指定時は YTMEMO_HOME を設定し、resolve_dirs() がその配下を使うようにする
    if let Some(ref h) = config.home_dir {
        std::env::set_var("YTMEMO_HOME", h);
    }
    let app = wire_ytmemo()?;
    Runner { app }.run(config)
}

