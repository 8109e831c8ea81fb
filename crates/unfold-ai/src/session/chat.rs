//! Async send and reset for TutorSession.

use tracing::{debug, info, warn};
use unfold_common::new_request_id;

use crate::{Attachment, GenerateRequest, Turn};

use super::manager::TutorSession;
use super::types::{Exchange, FailureKind, FALLBACK_REPLY, SEED_GREETING};

impl TutorSession {
    /// Append a user turn, ask the model, and record its answer.
    ///
    /// The user turn stays in the transcript even when the provider fails;
    /// only successful answers are appended. Nothing is sent when both
    /// `text` and `attachment` are empty.
    pub async fn exchange(&mut self, text: &str, attachment: Option<Attachment>) -> Exchange {
        let Some(turn) = Turn::user(text, attachment) else {
            debug!(session = %self.id, "ignoring empty message");
            return Exchange::Failed {
                kind: FailureKind::EmptyInput,
                detail: "message has neither text nor attachment".into(),
            };
        };
        self.transcript.push(turn);

        let request_id = new_request_id();
        let request = GenerateRequest {
            model: &self.settings.model,
            turns: &self.transcript,
            instructions: &self.settings.instructions,
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        };

        debug!(
            session = %self.id,
            request = %request_id,
            turns = self.transcript.len(),
            "sending tutor request"
        );

        let result = self.client.generate(&request).await;
        match result {
            Ok(generation) => {
                self.tracker.record(&self.settings.model, &generation.usage);
                let text = generation
                    .text
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_REPLY.to_string());
                self.transcript.push(Turn::assistant(text.clone()));
                Exchange::Answered { text }
            }
            Err(err) => {
                let kind = if err.is_credential() {
                    FailureKind::Credential
                } else {
                    FailureKind::Provider
                };
                warn!(
                    session = %self.id,
                    request = %request_id,
                    ?kind,
                    "tutor request failed: {err}"
                );
                Exchange::Failed {
                    kind,
                    detail: err.to_string(),
                }
            }
        }
    }

    /// Display-text form of [`exchange`](Self::exchange). Never fails.
    pub async fn send_message(&mut self, text: &str, attachment: Option<Attachment>) -> String {
        self.exchange(text, attachment).await.into_display_text()
    }

    /// Discard the transcript and seed a new conversation with the
    /// practice-menu greeting.
    pub async fn reset(&mut self) -> Exchange {
        info!(
            session = %self.id,
            discarded = self.transcript.len(),
            "resetting tutor conversation"
        );
        self.transcript.clear();
        self.tracker.reset();
        self.exchange(SEED_GREETING, None).await
    }

    /// Display-text form of [`reset`](Self::reset). Never fails.
    pub async fn reset_chat(&mut self) -> String {
        self.reset().await.into_display_text()
    }
}
