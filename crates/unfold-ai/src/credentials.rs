//! API key resolution.
//!
//! The key is resolved on every request so that a key rotated while the
//! process is running is picked up by the next call.

use std::fmt;

use crate::ProviderError;

/// Environment variables consulted when no explicit list is configured.
pub const DEFAULT_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone)]
pub enum ApiKeySource {
    /// First non-empty variable wins, read at request time.
    Env(Vec<String>),
    Fixed(String),
}

impl fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Env(vars) => f.debug_tuple("Env").field(vars).finish(),
            ApiKeySource::Fixed(_) => f.debug_tuple("Fixed").field(&"[REDACTED]").finish(),
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(DEFAULT_KEY_VARS.iter().map(|v| v.to_string()).collect())
    }
}

impl ApiKeySource {
    pub fn env<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ApiKeySource::Env(vars.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self) -> Result<String, ProviderError> {
        match self {
            ApiKeySource::Fixed(key) if key.trim().is_empty() => {
                Err(ProviderError::Credential("configured API key is empty".into()))
            }
            ApiKeySource::Fixed(key) => Ok(key.trim().to_string()),
            ApiKeySource::Env(vars) => vars
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
                .ok_or_else(|| {
                    ProviderError::Credential(format!(
                        "no API key set (checked {})",
                        vars.join(", ")
                    ))
                }),
        }
    }
}
