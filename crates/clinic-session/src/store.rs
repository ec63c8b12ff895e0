//! The session store.

use crate::error::SessionError;
use crate::provider::{IdentityProvider, IssuedSession};
use crate::snapshot::SessionSnapshot;
use clinic_core::User;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Caches directory-issued sessions for permission checks.
///
/// Mutation is confined to [`login`](SessionStore::login),
/// [`logout`](SessionStore::logout) and [`refresh`](SessionStore::refresh);
/// readers get point-in-time [`SessionSnapshot`]s. Lock guards are never held
/// across provider calls.
pub struct SessionStore {
    provider: Arc<dyn IdentityProvider>,
    /// Until set, the initial directory check has not completed and every
    /// snapshot reports `Loading`.
    ready: AtomicBool,
    /// Cached user records, token -> user.
    sessions: RwLock<HashMap<String, User>>,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            ready: AtomicBool::new(false),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Mark the initial session check complete.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Sign in and cache the issued session.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedSession, SessionError> {
        let issued = self.provider.login(email, password).await?;
        self.sessions
            .write()
            .expect("session map lock poisoned")
            .insert(issued.token.clone(), issued.user.clone());
        Ok(issued)
    }

    /// Sign out: revoke the token and drop the cached session.
    pub async fn logout(&self, token: &str) -> Result<(), SessionError> {
        self.provider.revoke(token).await?;
        self.sessions
            .write()
            .expect("session map lock poisoned")
            .remove(token);
        Ok(())
    }

    /// Resolve a bearer token to a snapshot.
    ///
    /// Cache misses fall through to the directory, so tokens issued before a
    /// restart still resolve. A rejected token tears the session down; a
    /// directory outage degrades to `Anonymous` without evicting the cache.
    pub async fn resolve(&self, token: Option<&str>) -> SessionSnapshot {
        if !self.is_ready() {
            return SessionSnapshot::Loading;
        }
        let Some(token) = token else {
            return SessionSnapshot::Anonymous;
        };

        let cached = {
            let sessions = self.sessions.read().expect("session map lock poisoned");
            sessions.get(token).cloned()
        };
        if let Some(user) = cached {
            return SessionSnapshot::Authenticated(user);
        }

        match self.provider.fetch_profile(token).await {
            Ok(Some(user)) => {
                self.sessions
                    .write()
                    .expect("session map lock poisoned")
                    .insert(token.to_string(), user.clone());
                SessionSnapshot::Authenticated(user)
            }
            Ok(None) => SessionSnapshot::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "profile fetch failed; treating request as anonymous");
                SessionSnapshot::Anonymous
            }
        }
    }

    /// Re-fetch the profile for a token, bypassing the cache.
    ///
    /// A rejected token destroys the cached session (forced re-login). A
    /// directory outage keeps the cached record.
    pub async fn refresh(&self, token: &str) -> SessionSnapshot {
        if !self.is_ready() {
            return SessionSnapshot::Loading;
        }

        match self.provider.fetch_profile(token).await {
            Ok(Some(user)) => {
                self.sessions
                    .write()
                    .expect("session map lock poisoned")
                    .insert(token.to_string(), user.clone());
                SessionSnapshot::Authenticated(user)
            }
            Ok(None) => {
                self.sessions
                    .write()
                    .expect("session map lock poisoned")
                    .remove(token);
                SessionSnapshot::Anonymous
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile refresh failed; keeping cached session");
                let sessions = self.sessions.read().expect("session map lock poisoned");
                match sessions.get(token) {
                    Some(user) => SessionSnapshot::Authenticated(user.clone()),
                    None => SessionSnapshot::Anonymous,
                }
            }
        }
    }
}
