//! The fixed back-office permission vocabulary.
//!
//! Wire names are camelCase and must match the identity directory's records
//! exactly; the grant map on a [`crate::User`] is keyed by these strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A back-office permission key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionKey {
    Dashboard,
    UserManagement,
    ResultManagement,
    DoctorManagement,
    ServiceManagement,
    AppointmentManagement,
    VideoManagement,
    TestimonialManagement,
    SubscriberManagement,
    AdminManagement,
}

impl PermissionKey {
    /// Every key, in display order.
    pub const ALL: [PermissionKey; 10] = [
        PermissionKey::Dashboard,
        PermissionKey::UserManagement,
        PermissionKey::ResultManagement,
        PermissionKey::DoctorManagement,
        PermissionKey::ServiceManagement,
        PermissionKey::AppointmentManagement,
        PermissionKey::VideoManagement,
        PermissionKey::TestimonialManagement,
        PermissionKey::SubscriberManagement,
        PermissionKey::AdminManagement,
    ];

    /// The wire name as it appears in directory-issued grant maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKey::Dashboard => "dashboard",
            PermissionKey::UserManagement => "userManagement",
            PermissionKey::ResultManagement => "resultManagement",
            PermissionKey::DoctorManagement => "doctorManagement",
            PermissionKey::ServiceManagement => "serviceManagement",
            PermissionKey::AppointmentManagement => "appointmentManagement",
            PermissionKey::VideoManagement => "videoManagement",
            PermissionKey::TestimonialManagement => "testimonialManagement",
            PermissionKey::SubscriberManagement => "subscriberManagement",
            PermissionKey::AdminManagement => "adminManagement",
        }
    }
}

impl std::fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a key outside the fixed vocabulary.
#[derive(Debug, Clone, Error)]
#[error("unknown permission key: {0}")]
pub struct UnknownPermission(pub String);

impl std::str::FromStr for PermissionKey {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}
