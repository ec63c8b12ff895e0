//! Static identity directory configuration.
//!
//! Accounts are declared inline in `clinic.yaml`. Passwords are stored as
//! Argon2 PHC strings, never in the clear. The directory can become a remote
//! service later; the session crate only sees it through a trait.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ConfigError;

/// The static identity directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Declared accounts.
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
}

impl DirectoryConfig {
    /// Reject directories with duplicate email addresses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for user in &self.users {
            let email = user.email.to_ascii_lowercase();
            if !seen.insert(email) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate email in directory: {}",
                    user.email
                )));
            }
        }
        Ok(())
    }
}

/// A single account declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Account id; assigned at load time when omitted.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    pub email: String,

    pub role: Role,

    /// Argon2 PHC string.
    pub password_hash: String,

    /// Per-key grants, camelCase wire names.
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
}
