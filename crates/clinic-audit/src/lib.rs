//! # clinic-audit
//!
//! Append-only audit logging for the clinic back office.
//!
//! Every security-relevant action (sign-ins, sign-outs, denied and granted
//! admin access, revoked sessions) is recorded as an [`AuditEvent`] with the
//! format `[actor - role - action]`.
//!
//! - **File output**: JSON Lines (one JSON object per line)
//! - **Console output**: human-readable log lines
//!
//! ## Event Types
//!
//! | Event Type | Description |
//! |------------|-------------|
//! | `LoginSucceeded` | Credentials verified, token issued |
//! | `LoginFailed` | Credentials rejected |
//! | `LogoutCompleted` | Token revoked at the user's request |
//! | `AccessGranted` | An admin requirement passed |
//! | `AccessDenied` | A requirement failed (unauthenticated or forbidden) |
//! | `SessionRevoked` | Session torn down after the directory rejected a token |
//!
//! ## Example
//!
//! ```rust,no_run
//! use clinic_audit::AuditLogger;
//! use clinic_core::AuditConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = AuditLogger::new(AuditConfig::default())?;
//! logger
//!     .log_access_denied("anonymous", "none", "GET /api/menu", "unauthenticated")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod event;
pub mod logger;
pub mod storage;

pub use error::AuditError;
pub use event::{AuditEvent, AuditEventBuilder, AuditEventType};
pub use logger::{AuditFilter, AuditLogger};
pub use storage::{AuditStorage, ConsoleStorage, DualStorage, FileStorage, NullStorage};
