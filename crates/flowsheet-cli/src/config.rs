//! Locating and reading the style configuration.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among `./flowsheet/config.toml` and the platform config directory
//! wins; with neither present the built-in style is used.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use flowsheet::{FlowsheetError, config::AppConfig};

const LOCAL_CONFIG: &str = "flowsheet/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for FlowsheetError {
    fn from(err: ConfigError) -> Self {
        FlowsheetError::Config(err.to_string())
    }
}

/// Resolves the configuration to use for this run.
///
/// # Errors
///
/// Fails when the explicit path is missing, or when the chosen file cannot be
/// read or parsed. A malformed discovered file is an error too; it is never
/// silently skipped.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FlowsheetError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return read_config(path);
    }

    match discovered_paths().into_iter().find(|path| path.exists()) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading discovered configuration");
            read_config(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit config locations in priority order.
fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "flowsheet", "flowsheet") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, FlowsheetError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
        .into()
    })
}
