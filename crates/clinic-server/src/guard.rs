//! The route guard.
//!
//! Translates bearer tokens into session snapshots and evaluates each
//! route's access requirement, auditing the outcome. This is the only place
//! the HTTP layer touches the permission model.

use crate::error::ApiError;
use crate::state::AppState;
use axum::http::HeaderMap;
use clinic_authz::{AccessRequirement, Decision, authorize};
use clinic_core::User;

/// Extract the bearer token from request headers.
///
/// Accepts `x-session-token: <token>` or `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(v) = headers.get("x-session-token").and_then(|h| h.to_str().ok()) {
        let s = v.trim();
        if !s.is_empty() {
            return Some(s.to_string());
        }
    }
    if let Some(v) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        && let Some(rest) = v.strip_prefix("Bearer ")
    {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Some(rest.to_string());
        }
    }
    None
}

/// Resolve the session and evaluate a requirement for one request.
///
/// A `Loading` snapshot defers the decision entirely. Denials are audited
/// with the deny reason; grants are audited only for admin-gated routes
/// (a requirement with a role or permission attached).
pub async fn gate(
    state: &AppState,
    headers: &HeaderMap,
    requirement: AccessRequirement,
    action: &str,
) -> Result<User, ApiError> {
    let token = bearer_token(headers);
    let snapshot = state.sessions().resolve(token.as_deref()).await;
    if snapshot.is_loading() {
        return Err(ApiError::Deferred);
    }

    let user = snapshot.user();
    if let Decision::Deny(reason) = authorize(user, requirement) {
        let (actor, role) = match user {
            Some(u) => (u.id.as_str(), u.role.as_str()),
            None => ("anonymous", "none"),
        };
        state
            .audit()
            .log_access_denied(actor, role, action, &reason.to_string())
            .await?;
        return Err(reason.into());
    }

    // authorize never allows without a user; the else arm is unreachable.
    let Some(user) = user else {
        return Err(ApiError::Unauthenticated);
    };

    if requirement.required_role.is_some() || requirement.required_permission.is_some() {
        state
            .audit()
            .log_access_granted(&user.id, user.role.as_str(), action)
            .await?;
    }

    Ok(user.clone())
}
