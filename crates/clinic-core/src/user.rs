//! Account records.

use crate::permission::PermissionKey;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An account record as issued by the identity directory.
///
/// The record is trusted as given; the permission model never validates it
/// against a backing store. The grant map is keyed by raw strings so keys
/// outside the fixed vocabulary are tolerated (they simply never match a
/// known [`PermissionKey`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, unique and immutable.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Per-key grants. Missing keys read as not granted.
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
}

impl User {
    /// Read the stored grant for a key, treating a missing entry as `false`.
    ///
    /// This is the raw map lookup; role-based bypasses (super admin, the
    /// implied dashboard grant) live in the permission model, not here.
    pub fn grant(&self, key: PermissionKey) -> bool {
        self.permissions.get(key.as_str()).copied().unwrap_or(false)
    }
}
