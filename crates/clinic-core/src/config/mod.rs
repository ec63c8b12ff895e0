//! Configuration types for the clinic back office.
//!
//! Configuration is loaded from a single YAML file (`clinic.yaml`) into a
//! [`ClinicConfig`]. Every section has defaults so a minimal file (or none at
//! all, for tests) is enough to start the service.

pub mod audit;
pub mod directory;
pub mod menu;
pub mod server;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use audit::AuditConfig;
pub use directory::{DirectoryConfig, DirectoryUser};
pub use menu::{MenuConfig, MenuEntry};
pub use server::ServerConfig;

/// Complete configuration loaded from `clinic.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Project name, informational only.
    #[serde(default)]
    pub project: Option<String>,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Static identity directory (accounts and grants).
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Audit logging settings.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Admin navigation; empty means the built-in entry list.
    #[serde(default)]
    pub menu: MenuConfig,
}

impl ClinicConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: ClinicConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation beyond what serde enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.directory.validate()?;
        Ok(())
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
