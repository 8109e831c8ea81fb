//! Configuration schema types for the unfold tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod provider;
mod system;
mod tutor;

pub use provider::*;
pub use system::*;
pub use tutor::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnfoldConfig {
    pub tutor: TutorConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}
