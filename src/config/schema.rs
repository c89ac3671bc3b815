use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::transport::RepeatMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playbar/config.toml` or `~/.config/playbar/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYBAR__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub mpris: MprisSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Starting volume, `0..=100`. Zero starts muted.
    pub volume: u8,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Starting repeat mode.
    pub repeat: RepeatModeSetting,
    /// Load the demo track into the player bar on startup.
    pub load_demo_track: bool,
    /// Where the demo track starts, as a percentage of its length.
    pub start_at_percent: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 50,
            shuffle: false,
            repeat: RepeatModeSetting::Off,
            load_demo_track: true,
            start_at_percent: 25.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "none", alias = "no-repeat", alias = "no_repeat")]
    Off,
    #[serde(alias = "playlist", alias = "all", alias = "repeat-all")]
    Context,
    #[serde(alias = "one", alias = "repeat-one", alias = "single")]
    Track,
}

impl From<RepeatModeSetting> for RepeatMode {
    fn from(setting: RepeatModeSetting) -> Self {
        match setting {
            RepeatModeSetting::Off => RepeatMode::Off,
            RepeatModeSetting::Context => RepeatMode::Context,
            RepeatModeSetting::Track => RepeatMode::Track,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `h` / `l`.
    pub scrub_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Draw the navigation sidebar on the left.
    pub show_sidebar: bool,
    /// Show the album column in the song table.
    pub show_album: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_sidebar: true,
            show_album: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MprisSettings {
    /// Expose the player on the session bus.
    pub enabled: bool,
    /// Suffix of the bus name `org.mpris.MediaPlayer2.<identity>`, also the
    /// reported `Identity`.
    pub identity: String,
}

impl Default for MprisSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            identity: "playbar".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    pub enabled: bool,
    pub level: LogLevelSetting,
    /// Log file. Defaults to `$XDG_DATA_HOME/playbar/playbar.log` or
    /// `~/.local/share/playbar/playbar.log`.
    pub path: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevelSetting::Info,
            path: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelSetting {
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelSetting> for log::LevelFilter {
    fn from(level: LogLevelSetting) -> Self {
        match level {
            LogLevelSetting::Off => log::LevelFilter::Off,
            LogLevelSetting::Error => log::LevelFilter::Error,
            LogLevelSetting::Warn => log::LevelFilter::Warn,
            LogLevelSetting::Info => log::LevelFilter::Info,
            LogLevelSetting::Debug => log::LevelFilter::Debug,
            LogLevelSetting::Trace => log::LevelFilter::Trace,
        }
    }
}
