//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod provider;
mod tutor;


use crate::schema::UnfoldConfig;
use unfold_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &UnfoldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    tutor::validate_tutor(&mut errors, config);
    provider::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
