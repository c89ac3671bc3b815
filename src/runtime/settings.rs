use std::path::PathBuf;

use crate::config;

/// Load settings from `path` (or the resolved default), falling back to
/// defaults when the file is missing, broken or fails validation.
///
/// Only an explicit `path` has to exist.
pub fn load_settings(path: Option<PathBuf>) -> config::Settings {
    let required = path.is_some();
    let path = path.or_else(config::resolve_config_path);
    match config::Settings::load_from(path, required) {
        Ok(s) => {
            if let Err(e) = s.validate() {
                eprintln!("playbar: {e}, using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("playbar: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
