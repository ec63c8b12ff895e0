//! Admin navigation filtering.

use crate::model::has_permission;
use clinic_core::{MenuEntry, User};

/// Filter the static navigation down to what the user may see.
///
/// Order-preserving; an entry without a permission tag is always visible.
/// The presentation-layer fallback for permissionless admins is the server's
/// concern, not this function's.
pub fn visible_menu(user: Option<&User>, entries: &[MenuEntry]) -> Vec<MenuEntry> {
    entries
        .iter()
        .filter(|entry| match entry.permission {
            None => true,
            Some(key) => has_permission(user, key),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::{PermissionKey, Role};

    fn entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("Dashboard", "/admin", Some(PermissionKey::Dashboard)),
            MenuEntry::new("Users", "/admin/users", Some(PermissionKey::UserManagement)),
            MenuEntry::new("Help", "/admin/help", None),
            MenuEntry::new(
                "Doctors",
                "/admin/doctors",
                Some(PermissionKey::DoctorManagement),
            ),
        ]
    }

    fn admin(grants: &[(&str, bool)]) -> User {
        User {
            id: "a-1".to_string(),
            name: "Desk".to_string(),
            email: "desk@clinic.example".to_string(),
            role: Role::Admin,
            permissions: grants
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn filtering_preserves_order() {
        let user = admin(&[("userManagement", true), ("doctorManagement", true)]);
        let visible = visible_menu(Some(&user), &entries());
        let labels: Vec<&str> = visible.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "Users", "Help", "Doctors"]);
    }

    #[test]
    fn failed_permissions_are_excluded() {
        let user = admin(&[("userManagement", false)]);
        let visible = visible_menu(Some(&user), &entries());
        let labels: Vec<&str> = visible.iter().map(|e| e.label.as_str()).collect();
        // Dashboard is implied for admins; untagged entries always show.
        assert_eq!(labels, vec!["Dashboard", "Help"]);
    }

    #[test]
    fn anonymous_sees_only_untagged_entries() {
        let visible = visible_menu(None, &entries());
        let labels: Vec<&str> = visible.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Help"]);
    }

    #[test]
    fn super_admin_sees_everything() {
        let mut user = admin(&[]);
        user.role = Role::SuperAdmin;
        assert_eq!(visible_menu(Some(&user), &entries()).len(), 4);
    }
}
