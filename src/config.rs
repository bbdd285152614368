//! Viewer settings from `~/.config/imagemap/config.toml`
//!
//! Settings never stop the viewer from starting: a missing file means
//! defaults, and an unusable one means defaults plus a one-line warning for
//! the status line.

mod types;

pub use types::{Config, MapConfig, TooltipConfig};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Why a config file was ignored
#[derive(Debug, Error)]
enum ConfigError {
    #[error("Could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    // toml's own Display spans several lines; keep only the message
    #[error("Ignoring {}: {}", .path.display(), .source.message())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Load settings from `path`, falling back to defaults
pub fn load_config_from(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(config) => ConfigResult {
            config: config.unwrap_or_default(),
            warning: None,
        },
        Err(e) => {
            log::error!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// `Ok(None)` when there is no file to read
fn read_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("No config at {:?}, using defaults", path);
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(Some(config))
}

/// `~/.config/imagemap/config.toml` on every platform
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("imagemap")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
