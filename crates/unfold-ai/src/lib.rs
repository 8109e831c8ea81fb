//! Tutoring engine for the unfold tutor.
//!
//! Provides:
//! - The conversation model (turns made of text and attachment parts)
//! - A `ModelClient` boundary with a Gemini implementation
//! - `TutorSession`, which owns the transcript, the persona and the
//!   reset/failure semantics
//! - Token usage tracking

pub mod credentials;
pub mod gemini;
pub mod persona;
pub mod session;
pub mod token_tracker;
pub mod turn;

use async_trait::async_trait;

pub use credentials::ApiKeySource;
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{Exchange, FailureKind, TutorSession, TutorSettings};
pub use token_tracker::TokenTracker;
pub use turn::{Attachment, Part, Speaker, Turn};

/// The remote model provider, as seen by a session.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<Generation, ProviderError>;
}

/// Everything a provider needs to produce the next assistant turn.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub turns: &'a [Turn],
    pub instructions: &'a str,
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

/// A successful provider response. `text` is `None` when the model
/// produced nothing usable (blocked prompt, empty candidate).
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub text: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Messages that providers use when the configured key or project does
/// not resolve. Matched case-insensitively.
const CREDENTIAL_MARKERS: &[&str] = &[
    "entity was not found",
    "api_key_invalid",
    "api key not valid",
];

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Credential error: {0}")]
    Credential(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
}

impl ProviderError {
    /// Whether this failure should be reported as a credential problem.
    ///
    /// True for `Credential`, and for any other variant whose message
    /// carries one of the known "entity not found" style markers.
    pub fn is_credential(&self) -> bool {
        match self {
            ProviderError::Credential(_) => true,
            other => mentions_credential(&other.to_string()),
        }
    }
}

pub(crate) fn mentions_credential(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    CREDENTIAL_MARKERS.iter().any(|m| lower.contains(m))
}
