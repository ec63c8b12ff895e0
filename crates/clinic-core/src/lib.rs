//! Shared domain types and configuration for the clinic back office.
//!
//! This crate holds the vocabulary every other crate speaks:
//! - [`Role`] — the baseline access tier of an account
//! - [`PermissionKey`] — the fixed set of back-office permission keys
//! - [`User`] — an account record as issued by the identity directory
//! - [`config`] — YAML configuration loaded from `clinic.yaml`

pub mod config;
pub mod permission;
pub mod role;
pub mod user;

pub use config::{
    AuditConfig, ClinicConfig, ConfigError, DirectoryConfig, DirectoryUser, MenuConfig, MenuEntry,
    ServerConfig,
};
pub use permission::{PermissionKey, UnknownPermission};
pub use role::{Role, UnknownRole};
pub use user::User;
