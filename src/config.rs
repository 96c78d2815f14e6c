//! Configuration loading
//!
//! Reads `~/.config/newtab/config.toml`. A missing file is not an error;
//! an unreadable or invalid file falls back to defaults with a warning.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::NewtabError;

pub use types::{
    Config, DEFAULT_DEBOUNCE_MS, DEFAULT_TIMEOUT_MS, FetchMode, SearchConfig, Shortcut,
    SuggestionsConfig,
};

const CONFIG_DIR: &str = "newtab";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface once, if any
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config file location
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and parse a config file, treating a missing file as defaults
pub fn read_config(path: &Path) -> Result<Config, NewtabError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(NewtabError::Io(e)),
    };

    toml::from_str(&contents).map_err(|e| NewtabError::InvalidConfig {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
