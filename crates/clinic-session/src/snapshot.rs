//! Read-side session views.

use clinic_core::User;

/// The session as seen by a reader at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSnapshot {
    /// The initial session check has not completed; all authorization
    /// decisions must be deferred.
    Loading,
    /// No user is signed in.
    Anonymous,
    /// A user is signed in. The record is a cached copy, trusted as issued.
    Authenticated(User),
}

impl SessionSnapshot {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionSnapshot::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionSnapshot::Loading)
    }
}
