//! Model provider connection settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Environment variables checked, in order, for the API key on
    /// every request.
    pub api_key_env: Vec<String>,
    pub base_url: String,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-600.
    pub request_timeout_secs: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: vec!["GEMINI_API_KEY".into(), "API_KEY".into()],
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
