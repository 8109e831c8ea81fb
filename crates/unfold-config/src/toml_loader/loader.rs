//! Core TOML config loading: read from path or platform default.

use crate::schema::UnfoldConfig;
use crate::validation;
use std::path::Path;
use tracing::info;
use unfold_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Load and validate config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A relative
/// `tutor.instructions_file` is resolved against the file's directory.
pub fn load_from_path(path: &Path) -> Result<UnfoldConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let mut config: UnfoldConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let (Some(file), Some(base)) = (config.tutor.instructions_file.as_mut(), path.parent()) {
        if file.is_relative() {
            *file = base.join(&*file);
        }
    }

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/unfold-tutor/config.toml`
/// On Linux: `~/.config/unfold-tutor/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<UnfoldConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(UnfoldConfig::default())
        }
        Err(e) => Err(e),
    }
}
