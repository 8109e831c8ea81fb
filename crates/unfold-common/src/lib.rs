//! Shared error and identity types for the unfold tutor workspace.

pub mod errors;
pub mod id;

pub use errors::{ConfigError, UnfoldError};
pub use id::{new_id, new_request_id, SessionId};

pub type Result<T> = std::result::Result<T, UnfoldError>;
