//! CLI 層: clap によるコマンドライン解析と Command への変換

mod args;

pub use args::{config_to_command, parse_args, parse_args_from, print_completion, Config, ParseOutcome};
