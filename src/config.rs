//! Configuration loading
//!
//! Reads `~/.config/subtoggle/config.toml`. A missing file yields defaults;
//! an unreadable or invalid file yields defaults plus a warning for the log.

use std::fs;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{
    Config, FormConfig, HttpConfig, SessionConfig, TooltipAnimation, TooltipConfig,
    TooltipPosition,
};

const CONFIG_DIR: &str = "subtoggle";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from an explicit path, or the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_config_from_path(path, true),
        None => match config_path() {
            Some(path) => load_config_from_path(&path, false),
            None => ConfigResult::default(),
        },
    }
}

/// `required` turns a missing file into a warning instead of silent defaults
pub fn load_config_from_path(path: &Path, required: bool) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            return ConfigResult::default();
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read {}: {}", path.display(), e)),
            };
        }
    };

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!(
                "Invalid config {}: {}. Using defaults.",
                path.display(),
                e.message()
            )),
        },
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
