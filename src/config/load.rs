use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load_from` reads a config file, then environment variables
/// (prefix `PLAYBAR__`), on top of struct defaults.
impl Settings {
    /// Load settings from a config file (if any) and the environment.
    ///
    /// A missing file is an error only when `required` is set, which is the
    /// case for a path given explicitly on the command line.
    pub fn load_from(config_path: Option<PathBuf>, required: bool) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(required));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYBAR")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        if self.playback.volume > 100 {
            return Err(Error::InvalidConfig(
                "playback.volume must be between 0 and 100".to_string(),
            ));
        }
        let start = self.playback.start_at_percent;
        if !start.is_finite() || !(0.0..=100.0).contains(&start) {
            return Err(Error::InvalidConfig(
                "playback.start_at_percent must be between 0 and 100".to_string(),
            ));
        }
        if self.controls.volume_step == 0 {
            return Err(Error::InvalidConfig(
                "controls.volume_step must be >= 1".to_string(),
            ));
        }
        if self.controls.scrub_seconds == 0 {
            return Err(Error::InvalidConfig(
                "controls.scrub_seconds must be >= 1".to_string(),
            ));
        }
        if self.mpris.identity.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "mpris.identity must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve the config path from `PLAYBAR_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYBAR_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playbar/config.toml`
/// or `~/.config/playbar/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("playbar").join("config.toml"))
}
