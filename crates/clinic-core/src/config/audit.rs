//! Audit logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for audit logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Whether audit logging is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directory the JSON-lines log file is written to.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Whether to also emit human-readable lines to stdout.
    #[serde(default)]
    pub stdout: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            directory: default_directory(),
            stdout: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_directory() -> String {
    "audit".to_string()
}
