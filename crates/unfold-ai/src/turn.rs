//! Conversation turns and their parts.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Role name on the Gemini wire.
    pub fn wire_role(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "model",
        }
    }
}

/// Inline binary content (problem photo, PDF) carried as base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub mime_type: String,
    pub data: String,
}

impl Attachment {
    /// Wrap data that is already base64 encoded.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Text(String),
    Attachment(Attachment),
}

impl Part {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::Attachment(_) => None,
        }
    }

    pub fn as_attachment(&self) -> Option<&Attachment> {
        match self {
            Part::Attachment(attachment) => Some(attachment),
            Part::Text(_) => None,
        }
    }
}

/// One party's contribution to the conversation.
///
/// Fields are private: a turn always has at least one part, and
/// assistant turns only ever hold a single text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    parts: Vec<Part>,
}

impl Turn {
    /// Build a user turn: a text part if `text` is non-empty, then an
    /// attachment part if one is given. Returns `None` when both are absent.
    pub fn user(text: &str, attachment: Option<Attachment>) -> Option<Self> {
        let mut parts = Vec::with_capacity(2);
        if !text.is_empty() {
            parts.push(Part::Text(text.to_string()));
        }
        if let Some(attachment) = attachment {
            parts.push(Part::Attachment(attachment));
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self {
            speaker: Speaker::User,
            parts,
        })
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// All text parts joined, ignoring attachments.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }

    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.parts.iter().filter_map(Part::as_attachment)
    }
}
