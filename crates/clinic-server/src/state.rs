//! Application state shared across handlers.

use clinic_audit::AuditLogger;
use clinic_core::{ClinicConfig, MenuEntry};
use clinic_session::SessionStore;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: ClinicConfig,
    /// Session cache in front of the identity directory.
    sessions: Arc<SessionStore>,
    /// Audit logger.
    audit: Arc<AuditLogger>,
    /// The static admin navigation, resolved once at startup.
    menu: Vec<MenuEntry>,
}

impl AppState {
    pub fn new(
        config: ClinicConfig,
        sessions: Arc<SessionStore>,
        audit: Arc<AuditLogger>,
    ) -> Self {
        let menu = config.menu.entries_or_default();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions,
                audit,
                menu,
            }),
        }
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.inner.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.inner.audit
    }

    pub fn menu_entries(&self) -> &[MenuEntry] {
        &self.inner.menu
    }
}
