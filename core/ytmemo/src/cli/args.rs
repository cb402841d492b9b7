use crate::domain::command::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub home_dir: Option<String>,
    /// 確認ダイアログにすべて「はい」と答える
    pub assume_yes: bool,
    /// コマンド名（None の場合は Session）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

const SUBCOMMANDS: [&str; 9] = [
    "export", "help", "history", "import", "memo", "session", "sidebar", "theme", "version",
];

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets YTMEMO_HOME for this process)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Answer yes to every confirmation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_history_subcommand() -> clap::Command {
    clap::Command::new("history")
        .about("Viewing history list / search / delete")
        .subcommand(clap::Command::new("list").about("List the viewing history (default)"))
        .subcommand(
            clap::Command::new("search")
                .about("Filter the history by title (case-insensitive)")
                .arg(clap::Arg::new("query").num_args(0..).value_name("query")),
        )
        .subcommand(clap::Command::new("render").about("Render the history as an HTML fragment"))
        .subcommand(
            clap::Command::new("delete")
                .about("Delete a history entry and its memos")
                .arg(clap::Arg::new("id").required(true).value_name("video-id")),
        )
}

fn build_memo_subcommand() -> clap::Command {
    clap::Command::new("memo")
        .about("Show the memos stored for a video")
        .subcommand_required(true)
        .subcommand(
            clap::Command::new("list")
                .about("List memos as text")
                .arg(clap::Arg::new("id").required(true).value_name("video-id")),
        )
        .subcommand(
            clap::Command::new("render")
                .about("Render memos as an HTML fragment")
                .arg(clap::Arg::new("id").required(true).value_name("video-id")),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("ytmemo")
            .about("Timestamped memos for YouTube review")
            .subcommand_required(false)
            .subcommand(
                clap::Command::new("session")
                    .about("Start the interactive session (default)")
                    .arg(
                        clap::Arg::new("page")
                            .value_parser(["video", "history", "settings"])
                            .value_name("start-page"),
                    ),
            )
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(clap::Command::new("version").about("Print the version"))
            .subcommand(build_history_subcommand())
            .subcommand(build_memo_subcommand())
            .subcommand(
                clap::Command::new("export")
                    .about("Write all history and memos to a backup file")
                    .arg(
                        clap::Arg::new("out")
                            .short('o')
                            .long("out")
                            .value_name("directory")
                            .num_args(1),
                    ),
            )
            .subcommand(
                clap::Command::new("import")
                    .about("Replace all history and memos from a backup file")
                    .arg(clap::Arg::new("file").required(true).value_name("file")),
            )
            .subcommand(
                clap::Command::new("theme")
                    .about("Show or set the theme")
                    .arg(
                        clap::Arg::new("theme")
                            .value_parser(["light", "dark"])
                            .value_name("light|dark"),
                    ),
            )
            .subcommand(
                clap::Command::new("sidebar")
                    .about("Show or toggle the sidebar state")
                    .arg(clap::Arg::new("action").value_parser(["toggle"]).value_name("toggle")),
            ),
    )
}

fn many(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|i| i.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let home_dir = matches.get_one::<String>("home-dir").cloned();
    let assume_yes = matches.get_flag("yes");

    let (command_name, command_args) = match matches.subcommand() {
        None | Some(("help", _)) => (None, Vec::new()),
        Some(("session", m)) => match m.get_one::<String>("page") {
            Some(page) => (Some("session".to_string()), vec![page.clone()]),
            None => (None, Vec::new()),
        },
        Some(("history", m)) => {
            let args = match m.subcommand() {
                Some(("search", s)) => {
                    let mut args = vec!["search".to_string()];
                    args.extend(many(s, "query"));
                    args
                }
                Some(("delete", s)) => {
                    let mut args = vec!["delete".to_string()];
                    args.extend(many(s, "id"));
                    args
                }
                Some(("render", _)) => vec!["render".to_string()],
                _ => vec!["list".to_string()],
            };
            (Some("history".to_string()), args)
        }
        Some(("memo", m)) => {
            let args = match m.subcommand() {
                Some((sub, s)) => {
                    let mut args = vec![sub.to_string()];
                    args.extend(many(s, "id"));
                    args
                }
                None => Vec::new(),
            };
            (Some("memo".to_string()), args)
        }
        Some(("export", m)) => {
            let args = match m.get_one::<String>("out") {
                Some(dir) => vec!["--out".to_string(), dir.clone()],
                None => Vec::new(),
            };
            (Some("export".to_string()), args)
        }
        Some(("import", m)) => (Some("import".to_string()), many(m, "file")),
        Some(("theme", m)) => (Some("theme".to_string()), many(m, "theme")),
        Some(("sidebar", m)) => (Some("sidebar".to_string()), many(m, "action")),
        Some((name, _)) => (Some(name.to_string()), Vec::new()),
    };

    Config {
        help,
        home_dir,
        assume_yes,
        command_name,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する（サブコマンド名のみ）
pub fn print_completion(shell: Shell) {
    match shell {
        Shell::Bash => {
            println!(
                r#"# Completion for ytmemo (subcommands only)
_ytmemo() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _ytmemo ytmemo
"#,
                SUBCOMMANDS.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"#compdef ytmemo
local subcommands
subcommands=({})
_describe 'command' subcommands
"#,
                SUBCOMMANDS
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!("complete -c ytmemo -f -a \"{}\"", SUBCOMMANDS.join(" "));
        }
        other => {
            eprintln!("ytmemo: completion for {} is not supported", other);
        }
    }
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match &config.command_name {
        Some(name) => Command::parse_with_args(name, &config.command_args),
        None => Command::Session { page: None },
    }
}
