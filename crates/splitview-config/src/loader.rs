//! TOML config loading: read from a path or the platform default.

use std::path::{Path, PathBuf};

use splitview_common::ConfigError;
use tracing::{info, warn};

use crate::schema::SplitViewConfig;
use crate::validation;

/// Get the platform-specific default config file path.
///
/// - macOS: `~/Library/Application Support/splitview/config.toml`
/// - Linux: `$XDG_CONFIG_HOME/splitview/config.toml`
/// - Windows: `%APPDATA%\splitview\config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("splitview").join("config.toml"))
}

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. If validation fails the error is
/// logged as a warning and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<SplitViewConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: SplitViewConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, a default config file is written there and
/// defaults are returned.
pub fn load_config() -> Result<SplitViewConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(SplitViewConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Write a default config file at `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = toml::to_string_pretty(&SplitViewConfig::default())
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize defaults: {e}")))?;

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
