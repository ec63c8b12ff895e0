//! Admin navigation entries.

use crate::permission::PermissionKey;
use serde::{Deserialize, Serialize};

/// A single admin navigation entry.
///
/// `permission: None` means the entry is always visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub permission: Option<PermissionKey>,
}

impl MenuEntry {
    pub fn new(
        label: impl Into<String>,
        path: impl Into<String>,
        permission: Option<PermissionKey>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            permission,
        }
    }
}

/// Navigation configuration; an empty entry list means the built-in one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

impl MenuConfig {
    /// The configured entries, or the built-in list when none are declared.
    pub fn entries_or_default(&self) -> Vec<MenuEntry> {
        if self.entries.is_empty() {
            default_entries()
        } else {
            self.entries.clone()
        }
    }
}

/// The built-in admin navigation, in display order.
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Dashboard", "/admin", Some(PermissionKey::Dashboard)),
        MenuEntry::new(
            "Users",
            "/admin/users",
            Some(PermissionKey::UserManagement),
        ),
        MenuEntry::new(
            "Lab results",
            "/admin/results",
            Some(PermissionKey::ResultManagement),
        ),
        MenuEntry::new(
            "Doctors",
            "/admin/doctors",
            Some(PermissionKey::DoctorManagement),
        ),
        MenuEntry::new(
            "Services",
            "/admin/services",
            Some(PermissionKey::ServiceManagement),
        ),
        MenuEntry::new(
            "Appointments",
            "/admin/appointments",
            Some(PermissionKey::AppointmentManagement),
        ),
        MenuEntry::new(
            "Videos",
            "/admin/videos",
            Some(PermissionKey::VideoManagement),
        ),
        MenuEntry::new(
            "Testimonials",
            "/admin/testimonials",
            Some(PermissionKey::TestimonialManagement),
        ),
        MenuEntry::new(
            "Subscribers",
            "/admin/subscribers",
            Some(PermissionKey::SubscriberManagement),
        ),
        MenuEntry::new(
            "Admins",
            "/admin/admins",
            Some(PermissionKey::AdminManagement),
        ),
        MenuEntry::new(
            "Audit log",
            "/admin/audit",
            Some(PermissionKey::AdminManagement),
        ),
    ]
}
