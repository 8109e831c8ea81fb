//! Tutoring session management.
//!
//! A `TutorSession` owns the ordered transcript, sends it with the fixed
//! persona on every request, and turns provider failures into typed
//! outcomes instead of errors.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::TutorSession;
pub use types::{
    Exchange, FailureKind, TutorSettings, CREDENTIAL_FAILURE_MESSAGE, EMPTY_INPUT_MESSAGE,
    FALLBACK_REPLY, PROVIDER_FAILURE_MESSAGE, SEED_GREETING,
};
