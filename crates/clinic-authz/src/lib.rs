//! Permission model for the clinic back office.
//!
//! Authorization is a pure, synchronous evaluation per navigation event:
//! the identity directory issues a [`clinic_core::User`] record (or nothing),
//! and this crate decides whether a requirement passes. There is no I/O and
//! no failure path; an absent or malformed grant map degrades to deny.
//!
//! The decision surface is four functions:
//! - [`has_permission`] — raw per-key check
//! - [`is_admin`] — back-office tier check
//! - [`authorize`] — requirement evaluation into an [`Decision`]
//! - [`visible_menu`] — order-preserving navigation filtering

pub mod decision;
pub mod menu;
pub mod model;
pub mod requirement;

pub use decision::{Decision, DenyReason};
pub use menu::visible_menu;
pub use model::{authorize, has_permission, is_admin};
pub use requirement::AccessRequirement;
