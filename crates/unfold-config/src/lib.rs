//! Unfold tutor configuration.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = unfold_config::load_config(None).expect("failed to load config");
//! println!("model: {}", config.tutor.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    LogLevel, LoggingConfig, ProviderConfig, TutorConfig, UnfoldConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use unfold_common::ConfigError;

/// Load config from an explicit path, or from the platform default path
/// (creating a commented default file there if none exists).
pub fn load_config(path: Option<&Path>) -> Result<UnfoldConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Read the persona override named by `tutor.instructions_file`, if any.
pub fn load_instructions(config: &TutorConfig) -> Result<Option<String>, ConfigError> {
    let Some(path) = config.instructions_file.as_deref() else {
        return Ok(None);
    };

    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    if text.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "tutor.instructions_file {} is empty",
            path.display()
        )));
    }

    tracing::info!("loaded tutor instructions from {}", path.display());
    Ok(Some(text))
}
