pub mod types;

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = ".pd-service-sync.toml";

/// Errors raised while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Get the global config file path (~/.pd-service-sync.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration from an explicit file or fall back to the global one.
///
/// An explicit path must exist. A missing global file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        return read_config(&global);
    }

    debug!("No config file found, using defaults");
    Ok(types::Config::default())
}

fn read_config(path: &Path) -> Result<types::Config, ConfigError> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse TOML config text; absent sections and keys take their defaults
pub fn parse_config(content: &str) -> Result<types::Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}
