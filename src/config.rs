// src/config.rs
// =============================================================================
// Settings for one mirror run.
//
// Built from the command line in cli.rs. Both sections have sensible defaults
// so library callers can start from `MirrorConfig::default()`.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::naming::NamingOptions;

/// HTTP transport settings handed to the reqwest client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpOptions {
    /// Per-request timeout in seconds. None = wait as long as the server does.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpOptions {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Everything that can change the outcome of a mirror run besides its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub naming: NamingOptions,
    #[serde(default)]
    pub http: HttpOptions,
}
