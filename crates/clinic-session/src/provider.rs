//! The identity directory interface.

use crate::error::SessionError;
use async_trait::async_trait;
use clinic_core::User;

/// A session as issued by the identity directory at login.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Opaque bearer token.
    pub token: String,
    /// The user record the token was issued for.
    pub user: User,
}

/// External identity directory.
///
/// The permission model trusts whatever record the directory issues; token
/// validity is entirely the directory's concern.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify credentials and issue a bearer token plus the user record.
    async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, SessionError>;

    /// Resolve a bearer token to its user record.
    ///
    /// `Ok(None)` means the directory rejected the token; the caller must
    /// tear the session down and force a re-login.
    async fn fetch_profile(&self, token: &str) -> Result<Option<User>, SessionError>;

    /// Invalidate a token. Unknown tokens are ignored.
    async fn revoke(&self, token: &str) -> Result<(), SessionError>;
}
