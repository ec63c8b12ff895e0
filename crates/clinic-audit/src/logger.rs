//! Audit logger implementation.
//!
//! Provides the main `AuditLogger` type with helper methods for logging
//! session and authorization events.

use chrono::{DateTime, Utc};
use clinic_core::AuditConfig;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AuditError;
use crate::event::{AuditEvent, AuditEventType};
use crate::storage::{AuditStorage, ConsoleStorage, DualStorage, FileStorage, NullStorage};

/// Filter for querying audit history.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Match a specific actor.
    pub actor: Option<String>,
    /// Match a specific event type.
    pub event_type: Option<AuditEventType>,
    /// Events at or after this time.
    pub start_time: Option<DateTime<Utc>>,
    /// Events at or before this time.
    pub end_time: Option<DateTime<Utc>>,
    /// Skip this many matches.
    pub offset: Option<usize>,
    /// Return at most this many matches.
    pub limit: Option<usize>,
}

impl AuditFilter {
    /// Whether an event passes this filter (offset/limit are applied by the
    /// storage backend, not here).
    pub fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(ref actor) = self.actor
            && &event.actor != actor
        {
            return false;
        }
        if let Some(event_type) = self.event_type
            && event.event_type != event_type
        {
            return false;
        }
        if let Some(start) = self.start_time
            && event.occurred_at < start
        {
            return false;
        }
        if let Some(end) = self.end_time
            && event.occurred_at > end
        {
            return false;
        }
        true
    }
}

/// The main audit logger.
///
/// Provides convenient methods for logging different event types following
/// the [actor - role - action] format.
pub struct AuditLogger {
    config: AuditConfig,
    storage: Arc<dyn AuditStorage>,
}

impl AuditLogger {
    /// Create a new audit logger with the given configuration.
    pub fn new(config: AuditConfig) -> Result<Self, AuditError> {
        let storage: Arc<dyn AuditStorage> = if !config.enabled {
            Arc::new(NullStorage::new())
        } else {
            let file_path = Self::resolve_log_path(&config);

            if config.stdout {
                // Dual output: file + console
                Arc::new(DualStorage::new(&file_path)?)
            } else {
                // File only
                Arc::new(FileStorage::new(&file_path)?)
            }
        };

        Ok(Self { config, storage })
    }

    /// Create a logger with a custom storage backend.
    pub fn with_storage(config: AuditConfig, storage: Arc<dyn AuditStorage>) -> Self {
        Self { config, storage }
    }

    /// Create a disabled (no-op) logger.
    pub fn disabled() -> Self {
        Self {
            config: AuditConfig {
                enabled: false,
                ..Default::default()
            },
            storage: Arc::new(NullStorage::new()),
        }
    }

    /// Create a console-only logger (useful for development).
    pub fn console_only() -> Self {
        Self {
            config: AuditConfig {
                enabled: true,
                stdout: true,
                ..Default::default()
            },
            storage: Arc::new(ConsoleStorage::new()),
        }
    }

    /// Resolve the log file path from configuration.
    fn resolve_log_path(config: &AuditConfig) -> PathBuf {
        let mut path = PathBuf::from(&config.directory);
        path.push("audit.log");
        path
    }

    /// Check if logging is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Log an audit event.
    pub async fn log(&self, event: AuditEvent) -> Result<(), AuditError> {
        if !self.config.enabled {
            return Ok(());
        }

        // Also log to tracing for structured logging integration
        tracing::debug!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            actor = %event.actor,
            role = %event.role,
            action = %event.action,
            "Audit event"
        );

        self.storage.store(event).await
    }

    /// Query audit history.
    pub async fn query(&self, filter: AuditFilter) -> Result<Vec<AuditEvent>, AuditError> {
        self.storage.query(filter).await
    }

    /// Log a successful login.
    pub async fn log_login_succeeded(&self, actor: &str, role: &str) -> Result<(), AuditError> {
        self.log(AuditEvent::new(
            AuditEventType::LoginSucceeded,
            actor,
            role,
            "POST /api/login",
        ))
        .await
    }

    /// Log a failed login attempt. The actor is the attempted email.
    pub async fn log_login_failed(&self, email: &str, detail: &str) -> Result<(), AuditError> {
        self.log(
            AuditEvent::builder(AuditEventType::LoginFailed, email, "none", "POST /api/login")
                .detail(detail)
                .build(),
        )
        .await
    }

    /// Log a completed logout.
    pub async fn log_logout(&self, actor: &str, role: &str) -> Result<(), AuditError> {
        self.log(AuditEvent::new(
            AuditEventType::LogoutCompleted,
            actor,
            role,
            "POST /api/logout",
        ))
        .await
    }

    /// Log an admin requirement passing.
    pub async fn log_access_granted(
        &self,
        actor: &str,
        role: &str,
        action: &str,
    ) -> Result<(), AuditError> {
        self.log(AuditEvent::new(
            AuditEventType::AccessGranted,
            actor,
            role,
            action,
        ))
        .await
    }

    /// Log a denied request.
    pub async fn log_access_denied(
        &self,
        actor: &str,
        role: &str,
        action: &str,
        reason: &str,
    ) -> Result<(), AuditError> {
        self.log(
            AuditEvent::builder(AuditEventType::AccessDenied, actor, role, action)
                .reason(reason)
                .build(),
        )
        .await
    }

    /// Log a session teardown forced by the directory rejecting a token.
    pub async fn log_session_revoked(&self, actor: &str, role: &str) -> Result<(), AuditError> {
        self.log(AuditEvent::new(
            AuditEventType::SessionRevoked,
            actor,
            role,
            "session",
        ))
        .await
    }
}
