//! Session lifecycle for the clinic back office.
//!
//! A session is an opaque bearer token plus a cached copy of the user record
//! it was issued for. The identity directory is the single authority on both;
//! this crate caches its answers so permission checks need no round trip.
//!
//! Write access to the session set is confined to the login / logout /
//! refresh flows on [`SessionStore`]; everything else reads immutable
//! [`SessionSnapshot`]s. Until the store is marked ready, snapshots report
//! [`SessionSnapshot::Loading`] and callers must defer authorization
//! decisions.

pub mod directory;
pub mod error;
pub mod provider;
pub mod snapshot;
pub mod store;

pub use directory::{StaticDirectory, hash_password};
pub use error::SessionError;
pub use provider::{IdentityProvider, IssuedSession};
pub use snapshot::SessionSnapshot;
pub use store::SessionStore;
