//! config/settings.json から AppConfig を読む

use crate::domain::AppConfig;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;

/// ファイルが無ければ既定値。JSON が壊れていれば Error::Json、値が不正なら Error::Env。
pub fn load_app_config(fs: &dyn FileSystem, path: &Path) -> Result<AppConfig, Error> {
    if !fs.exists(path) {
        return Ok(AppConfig::default());
    }
    let text = fs.read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&text)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))?;
    if !(config.frame_rate.is_finite() && config.frame_rate > 0.0) {
        return Err(Error::env(format!(
            "{}: frame_rate must be a positive number",
            path.display()
        )));
    }
    if !(config.headless_duration_secs.is_finite() && config.headless_duration_secs >= 0.0) {
        return Err(Error::env(format!(
            "{}: headless_duration_secs must not be negative",
            path.display()
        )));
    }
    Ok(config)
}
