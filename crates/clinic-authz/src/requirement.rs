//! Access requirements declared by protected views.

use clinic_core::{PermissionKey, Role};

/// What a protected view demands of the current user.
///
/// A view declares zero or one required role and zero or one required
/// permission; when both are present they are ANDed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    pub required_role: Option<Role>,
    pub required_permission: Option<PermissionKey>,
}

impl AccessRequirement {
    /// No requirement beyond being signed in.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Require a specific role.
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            required_permission: None,
        }
    }

    /// Require a specific permission.
    pub fn permission(key: PermissionKey) -> Self {
        Self {
            required_role: None,
            required_permission: Some(key),
        }
    }

    /// Additionally require a permission.
    pub fn and_permission(mut self, key: PermissionKey) -> Self {
        self.required_permission = Some(key);
        self
    }
}
