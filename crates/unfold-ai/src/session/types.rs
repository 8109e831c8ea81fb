//! Session settings and exchange outcomes.

use crate::persona::{DEFAULT_INSTRUCTIONS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Reply recorded when the provider succeeds without usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I cannot process this request.";

/// User turn that seeds a fresh conversation after a reset.
pub const SEED_GREETING: &str = "Hello! Please show the practice menu.";

pub const CREDENTIAL_FAILURE_MESSAGE: &str =
    "API key error: please check your API key configuration.";

pub const PROVIDER_FAILURE_MESSAGE: &str =
    "Sorry, I'm having connection trouble. Please try again in a few seconds.";

pub const EMPTY_INPUT_MESSAGE: &str = "Please type a question or attach a problem file.";

/// Fixed per-session generation settings.
#[derive(Debug, Clone)]
pub struct TutorSettings {
    pub model: String,
    /// Persona sent out-of-band with every request.
    pub instructions: String,
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: None,
        }
    }
}

impl TutorSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: Option<u32>) -> Self {
        self.max_output_tokens = max;
        self
    }
}

/// Why an exchange produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The provider could not resolve the API key or project.
    Credential,
    /// Any other provider or transport failure.
    Provider,
    /// Neither text nor attachment was given; nothing was sent.
    EmptyInput,
}

impl FailureKind {
    pub fn user_message(self) -> &'static str {
        match self {
            FailureKind::Credential => CREDENTIAL_FAILURE_MESSAGE,
            FailureKind::Provider => PROVIDER_FAILURE_MESSAGE,
            FailureKind::EmptyInput => EMPTY_INPUT_MESSAGE,
        }
    }
}

/// Outcome of one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    Answered { text: String },
    Failed { kind: FailureKind, detail: String },
}

impl Exchange {
    pub fn is_answered(&self) -> bool {
        matches!(self, Exchange::Answered { .. })
    }

    /// Text the host should show: the answer, or the fixed message for
    /// the failure kind.
    pub fn display_text(&self) -> &str {
        match self {
            Exchange::Answered { text } => text,
            Exchange::Failed { kind, .. } => kind.user_message(),
        }
    }

    pub fn into_display_text(self) -> String {
        match self {
            Exchange::Answered { text } => text,
            Exchange::Failed { kind, .. } => kind.user_message().to_string(),
        }
    }
}
