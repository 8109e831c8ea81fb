//! Tutor persona and sampling settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Generation model identifier.
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Output cap (valid range: 1-65536). Unset leaves it to the model.
    pub max_output_tokens: Option<u32>,
    /// File whose contents replace the built-in persona. Relative paths
    /// are resolved against the config file's directory.
    pub instructions_file: Option<PathBuf>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".into(),
            temperature: 0.7,
            max_output_tokens: None,
            instructions_file: None,
        }
    }
}
