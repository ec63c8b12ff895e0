//! HTTP service for the clinic back office.
//!
//! Exposes the permission model over a small JSON API: session endpoints
//! (login / logout / refresh / profile), the filtered admin menu, and the
//! audit log query. Every protected route goes through [`guard::gate`],
//! which resolves the bearer token to a session snapshot and evaluates the
//! route's [`clinic_authz::AccessRequirement`].

pub mod error;
pub mod guard;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
