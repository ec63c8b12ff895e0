//! Config-backed identity directory.
//!
//! Accounts come from `clinic.yaml`. Hardcoded for now, but the rest of the
//! system only sees the [`IdentityProvider`] trait, so a remote directory can
//! replace this without touching callers.

use crate::error::SessionError;
use crate::provider::{IdentityProvider, IssuedSession};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use clinic_core::config::DirectoryConfig;
use clinic_core::{PermissionKey, User};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

struct DirectoryAccount {
    user: User,
    password_hash: String,
}

/// In-process identity directory backed by configuration.
pub struct StaticDirectory {
    accounts: Vec<DirectoryAccount>,
    /// Issued tokens, token -> user id.
    tokens: RwLock<HashMap<String, String>>,
}

impl StaticDirectory {
    /// Build the directory from configuration.
    ///
    /// Accounts without an id get one assigned. Back-office accounts always
    /// get their `dashboard` grant recorded as true, matching the invariant
    /// the admin-creation flow enforces.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        let accounts = config
            .users
            .iter()
            .map(|declared| {
                let mut permissions = declared.permissions.clone();
                if declared.role.is_admin() {
                    permissions.insert(PermissionKey::Dashboard.as_str().to_string(), true);
                }
                DirectoryAccount {
                    user: User {
                        id: declared
                            .id
                            .clone()
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                        name: declared.name.clone(),
                        email: declared.email.clone(),
                        role: declared.role,
                        permissions,
                    },
                    password_hash: declared.password_hash.clone(),
                }
            })
            .collect();

        Self {
            accounts,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Number of declared accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_by_email(&self, email: &str) -> Option<&DirectoryAccount> {
        self.accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
    }

    fn account_by_id(&self, id: &str) -> Option<&DirectoryAccount> {
        self.accounts.iter().find(|a| a.user.id == id)
    }
}

#[async_trait]
impl IdentityProvider for StaticDirectory {
    async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, SessionError> {
        // Unknown email and wrong password report the same error.
        let account = self
            .account_by_email(email)
            .ok_or(SessionError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|_| SessionError::InvalidCredentials)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| SessionError::InvalidCredentials)?;

        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .expect("token map lock poisoned")
            .insert(token.clone(), account.user.id.clone());

        tracing::debug!(user = %account.user.id, "issued session token");

        Ok(IssuedSession {
            token,
            user: account.user.clone(),
        })
    }

    async fn fetch_profile(&self, token: &str) -> Result<Option<User>, SessionError> {
        let user_id = {
            let tokens = self.tokens.read().expect("token map lock poisoned");
            tokens.get(token).cloned()
        };
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        Ok(self.account_by_id(&user_id).map(|a| a.user.clone()))
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        self.tokens
            .write()
            .expect("token map lock poisoned")
            .remove(token);
        Ok(())
    }
}

/// Hash a password into an Argon2 PHC string suitable for `clinic.yaml`.
pub fn hash_password(password: &str) -> Result<String, SessionError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SessionError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::Role;
    use clinic_core::config::DirectoryUser;

    fn directory() -> StaticDirectory {
        let config = DirectoryConfig {
            users: vec![
                DirectoryUser {
                    id: Some("su-1".to_string()),
                    name: "Root".to_string(),
                    email: "root@clinic.example".to_string(),
                    role: Role::SuperAdmin,
                    password_hash: hash_password("rootpw").unwrap(),
                    permissions: HashMap::new(),
                },
                DirectoryUser {
                    id: None,
                    name: "Desk".to_string(),
                    email: "desk@clinic.example".to_string(),
                    role: Role::Admin,
                    password_hash: hash_password("deskpw").unwrap(),
                    permissions: HashMap::from([(
                        "appointmentManagement".to_string(),
                        true,
                    )]),
                },
            ],
        };
        StaticDirectory::from_config(&config)
    }

    #[tokio::test]
    async fn login_issues_token_and_profile_resolves() {
        let dir = directory();
        let issued = dir.login("root@clinic.example", "rootpw").await.unwrap();
        assert_eq!(issued.user.id, "su-1");

        let profile = dir.fetch_profile(&issued.token).await.unwrap();
        assert_eq!(profile.unwrap().email, "root@clinic.example");
    }

    #[tokio::test]
    async fn login_is_case_insensitive_on_email() {
        let dir = directory();
        assert!(dir.login("ROOT@clinic.example", "rootpw").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let dir = directory();
        let wrong_pw = dir.login("root@clinic.example", "nope").await;
        let unknown = dir.login("ghost@clinic.example", "nope").await;
        assert!(matches!(wrong_pw, Err(SessionError::InvalidCredentials)));
        assert!(matches!(unknown, Err(SessionError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let dir = directory();
        let issued = dir.login("root@clinic.example", "rootpw").await.unwrap();
        dir.revoke(&issued.token).await.unwrap();
        assert_eq!(dir.fetch_profile(&issued.token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn admin_accounts_get_dashboard_recorded_true() {
        let dir = directory();
        let issued = dir.login("desk@clinic.example", "deskpw").await.unwrap();
        assert_eq!(issued.user.permissions.get("dashboard"), Some(&true));
        // Declared grants are preserved alongside.
        assert_eq!(
            issued.user.permissions.get("appointmentManagement"),
            Some(&true)
        );
        // An id was assigned at load time.
        assert!(!issued.user.id.is_empty());
    }
}
