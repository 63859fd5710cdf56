//! Settings parser for .formview/config.toml

use super::types::Settings;
use formview_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FORMVIEW_DIR: &str = ".formview";

/// Path of the settings file for a project directory
pub fn settings_path(project_path: &Path) -> PathBuf {
    project_path.join(FORMVIEW_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<project>/.formview/config.toml`
///
/// A missing or malformed file is not an error: defaults are used and the
/// problem is logged.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = settings_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    debug!("Loaded settings from {:?}", config_path);
                    settings
                }
                Err(e) => {
                    warn!("Ignoring {:?}: {}", config_path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
