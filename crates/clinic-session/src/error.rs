//! Error types for the session crate.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Email or password did not match a directory account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The identity directory could not be reached.
    #[error("identity directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
