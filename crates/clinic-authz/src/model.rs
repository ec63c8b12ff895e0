//! The permission model.
//!
//! All three functions are pure: they trust the user record as issued by the
//! identity directory (including its absence) and never perform I/O.

use crate::decision::{Decision, DenyReason};
use crate::requirement::AccessRequirement;
use clinic_core::{PermissionKey, Role, User};

/// Check a single permission key against a user record.
///
/// - no user: denied
/// - super admin: granted, regardless of the stored map
/// - `dashboard`: implied for any back-office account, never read from
///   storage (stored records predating this rule may carry `false`)
/// - otherwise: the stored grant, missing keys reading as `false`
pub fn has_permission(user: Option<&User>, key: PermissionKey) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.role == Role::SuperAdmin {
        return true;
    }
    if key == PermissionKey::Dashboard && user.role.is_admin() {
        return true;
    }
    user.grant(key)
}

/// Whether the user holds a back-office tier (`admin` or `super_admin`).
pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.role.is_admin())
}

/// Evaluate an access requirement.
///
/// The role check runs before the permission check; this only affects which
/// denial is reported, not the outcome, since both must pass.
pub fn authorize(user: Option<&User>, requirement: AccessRequirement) -> Decision {
    let Some(user) = user else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    if let Some(required) = requirement.required_role
        && user.role != required
        && user.role != Role::SuperAdmin
    {
        tracing::debug!(
            user = %user.id,
            role = %user.role,
            required = %required,
            "role requirement not met"
        );
        return Decision::Deny(DenyReason::Forbidden);
    }

    if let Some(key) = requirement.required_permission
        && !has_permission(Some(user), key)
    {
        tracing::debug!(user = %user.id, permission = %key, "permission not granted");
        return Decision::Deny(DenyReason::Forbidden);
    }

    Decision::Allow
}
