//! TutorSession struct and transcript access.

use std::sync::Arc;

use unfold_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::{ModelClient, Turn};

use super::types::TutorSettings;

/// A tutoring conversation: the transcript, the fixed persona, and the
/// client used to answer.
///
/// Operations take `&mut self`, so at most one request is in flight per
/// session. Hosts that share a session across tasks wrap it in a
/// `tokio::sync::Mutex`.
pub struct TutorSession {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn ModelClient>,
    pub(super) settings: TutorSettings,
    /// Chronological; only ever appended to or cleared.
    pub(super) transcript: Vec<Turn>,
    pub(super) tracker: TokenTracker,
}

impl TutorSession {
    pub fn new(client: Arc<dyn ModelClient>, settings: TutorSettings) -> Self {
        Self {
            id: SessionId::new(),
            client,
            settings,
            transcript: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &TutorSettings {
        &self.settings
    }

    /// The conversation so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
