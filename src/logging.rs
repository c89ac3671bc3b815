//! File logging. The terminal is owned by the UI, so log lines go to a file.

use std::{
    env,
    fs::{self, OpenOptions},
    path::PathBuf,
};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::LogSettings;
use crate::error::Result;

/// Install the global file logger described by `settings`.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init(settings: &LogSettings) -> Result<Option<PathBuf>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(path) = settings.path.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(settings.level.into(), config, file)?;

    log::info!("logging to {}", path.display());
    Ok(Some(path))
}

/// `$XDG_DATA_HOME/playbar/playbar.log`, or `~/.local/share/playbar/playbar.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    };

    data_home.map(|d| d.join("playbar").join("playbar.log"))
}
