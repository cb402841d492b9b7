//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "ytmemo";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

/// 空文字は未設定として扱う
fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var(name).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

fn xdg_dir(xdg_var: &str, home_fallback: &[&str]) -> Result<PathBuf, Error> {
    let base = non_empty_var(xdg_var)
        .or_else(|| {
            non_empty_var("HOME").map(|h| home_fallback.iter().fold(h, |p, s| p.join(s)))
        })
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(base.join(APP_DIR))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = non_empty_var("YTMEMO_HOME") {
            return Ok(Dirs {
                config_dir: home.join("config"),
                data_dir: home.join("data"),
                state_dir: home.join("state"),
            });
        }
        Ok(Dirs {
            config_dir: xdg_dir("XDG_CONFIG_HOME", &[".config"])?,
            data_dir: xdg_dir("XDG_DATA_HOME", &[".local", "share"])?,
            state_dir: xdg_dir("XDG_STATE_HOME", &[".local", "state"])?,
        })
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        if let Some(path) = non_empty_var("YTMEMO_LOG_FILE") {
            return Ok(path);
        }
        Ok(self.resolve_dirs()?.log_file())
    }
}
