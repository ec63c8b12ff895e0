//! Authorization decisions.

use serde::{Deserialize, Serialize};

/// Why access was denied.
///
/// Both cases resolve to a redirect today, but they are distinct so the UI
/// can render different messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No user is signed in.
    Unauthenticated,
    /// A user is signed in but lacks the required role or permission.
    Forbidden,
}

impl DenyReason {
    /// The route the UI is sent to for this denial.
    pub fn redirect_target(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "/login",
            DenyReason::Forbidden => "/unauthorized",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::Unauthenticated => write!(f, "unauthenticated"),
            DenyReason::Forbidden => write!(f, "forbidden"),
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// The redirect target for a denial, `None` when allowed.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(reason.redirect_target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets_are_fixed() {
        assert_eq!(DenyReason::Unauthenticated.redirect_target(), "/login");
        assert_eq!(DenyReason::Forbidden.redirect_target(), "/unauthorized");
        assert_eq!(Decision::Allow.redirect_target(), None);
    }

    #[test]
    fn deny_reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DenyReason::Unauthenticated).unwrap(),
            "\"unauthenticated\""
        );
    }
}
