//! Validation for the `[provider]` section.

use crate::schema::UnfoldConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &UnfoldConfig) {
    let provider = &config.provider;

    if provider.api_key_env.is_empty() {
        errors.push("provider.api_key_env must name at least one variable".into());
    }
    for (i, var) in provider.api_key_env.iter().enumerate() {
        validate_not_blank(errors, &format!("provider.api_key_env[{i}]"), var);
    }

    if !(provider.base_url.starts_with("https://") || provider.base_url.starts_with("http://")) {
        errors.push(format!(
            "provider.base_url = {:?} must be an http(s) URL",
            provider.base_url
        ));
    }

    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "provider.request_timeout_secs",
        provider.request_timeout_secs,
        1,
        600,
    );
}
