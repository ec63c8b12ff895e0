//! Audit event types.
//!
//! Events follow the format [actor - role - action], with a deny reason and
//! free-form detail where applicable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    // ===== Session events =====
    /// Credentials verified, token issued.
    LoginSucceeded,
    /// Credentials rejected.
    LoginFailed,
    /// Token revoked at the user's request.
    LogoutCompleted,
    /// Session torn down after the directory rejected a token.
    SessionRevoked,

    // ===== Authorization events =====
    /// An admin requirement passed.
    AccessGranted,
    /// A requirement failed (unauthenticated or forbidden).
    AccessDenied,
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginSucceeded => write!(f, "LOGIN_SUCCEEDED"),
            Self::LoginFailed => write!(f, "LOGIN_FAILED"),
            Self::LogoutCompleted => write!(f, "LOGOUT_COMPLETED"),
            Self::SessionRevoked => write!(f, "SESSION_REVOKED"),
            Self::AccessGranted => write!(f, "ACCESS_GRANTED"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
        }
    }
}

/// An audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique event ID.
    pub event_id: Uuid,

    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,

    /// Event type.
    pub event_type: AuditEventType,

    // ===== Core fields: [actor - role - action] =====
    /// Who acted: user id, or the attempted email for failed logins, or
    /// "anonymous".
    pub actor: String,

    /// The actor's role wire name, "none" when unauthenticated.
    pub role: String,

    /// What was attempted (e.g. "POST /api/login", "GET /api/menu").
    pub action: String,

    // ===== Context =====
    /// Deny reason ("unauthenticated" / "forbidden") for AccessDenied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Free-form detail (e.g. which permission was missing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
}

impl AuditEvent {
    /// Create a new audit event with the given type and core fields.
    pub fn new(
        event_type: AuditEventType,
        actor: impl Into<String>,
        role: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            event_type,
            actor: actor.into(),
            role: role.into(),
            action: action.into(),
            reason: None,
            detail: None,
            client_ip: None,
        }
    }

    /// Create a builder for an audit event.
    pub fn builder(
        event_type: AuditEventType,
        actor: impl Into<String>,
        role: impl Into<String>,
        action: impl Into<String>,
    ) -> AuditEventBuilder {
        AuditEventBuilder::new(event_type, actor, role, action)
    }

    /// Format the event as a human-readable log line.
    ///
    /// Format: `[timestamp] EVENT_TYPE actor=... role=... action=... [reason=...]`
    pub fn to_log_line(&self) -> String {
        let mut line = format!(
            "[{}] {} actor={} role={} action={}",
            self.occurred_at.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.event_type,
            self.actor,
            self.role,
            self.action,
        );

        if let Some(ref reason) = self.reason {
            line.push_str(&format!(" reason={}", reason));
        }

        if let Some(ref detail) = self.detail {
            line.push_str(&format!(" detail=\"{}\"", detail.replace('"', "'")));
        }

        if let Some(ref ip) = self.client_ip {
            line.push_str(&format!(" client_ip={}", ip));
        }

        line
    }
}

/// Builder for creating audit events.
#[derive(Debug)]
pub struct AuditEventBuilder {
    event: AuditEvent,
}

impl AuditEventBuilder {
    /// Create a new builder with required fields.
    pub fn new(
        event_type: AuditEventType,
        actor: impl Into<String>,
        role: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            event: AuditEvent::new(event_type, actor, role, action),
        }
    }

    /// Set the deny reason.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.event.reason = Some(reason.into());
        self
    }

    /// Set the free-form detail.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.event.detail = Some(detail.into());
        self
    }

    /// Set the client IP.
    pub fn client_ip(mut self, ip: impl Into<String>) -> Self {
        self.event.client_ip = Some(ip.into());
        self
    }

    /// Build the audit event.
    pub fn build(self) -> AuditEvent {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = AuditEvent::builder(
            AuditEventType::AccessDenied,
            "u-42",
            "admin",
            "GET /api/audit",
        )
        .reason("forbidden")
        .detail("missing adminManagement")
        .build();

        assert_eq!(event.event_type, AuditEventType::AccessDenied);
        assert_eq!(event.actor, "u-42");
        assert_eq!(event.role, "admin");
        assert_eq!(event.reason, Some("forbidden".to_string()));
    }

    #[test]
    fn test_to_log_line() {
        let event = AuditEvent::builder(
            AuditEventType::LoginFailed,
            "ghost@clinic.example",
            "none",
            "POST /api/login",
        )
        .detail("invalid credentials")
        .build();

        let log_line = event.to_log_line();
        assert!(log_line.contains("LOGIN_FAILED"));
        assert!(log_line.contains("actor=ghost@clinic.example"));
        assert!(log_line.contains("role=none"));
        assert!(log_line.contains("action=POST /api/login"));
        assert!(log_line.contains("detail="));
    }

    #[test]
    fn test_event_type_display() {
        assert_eq!(format!("{}", AuditEventType::LoginSucceeded), "LOGIN_SUCCEEDED");
        assert_eq!(format!("{}", AuditEventType::AccessDenied), "ACCESS_DENIED");
        assert_eq!(format!("{}", AuditEventType::SessionRevoked), "SESSION_REVOKED");
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let event = AuditEvent::new(
            AuditEventType::LogoutCompleted,
            "u-1",
            "admin",
            "POST /api/logout",
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("reason"));
        assert!(!json.contains("client_ip"));
    }
}
