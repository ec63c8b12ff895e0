//! API handlers.

use crate::error::ApiError;
use crate::guard::{bearer_token, gate};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use clinic_audit::{AuditEvent, AuditEventType, AuditFilter};
use clinic_authz::{AccessRequirement, has_permission, visible_menu};
use clinic_core::{MenuEntry, PermissionKey, Role, User};
use clinic_session::{SessionError, SessionSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Default page size for audit queries.
const AUDIT_QUERY_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !state.sessions().is_ready() {
        return Err(ApiError::Deferred);
    }

    match state.sessions().login(&req.email, &req.password).await {
        Ok(issued) => {
            state
                .audit()
                .log_login_succeeded(&issued.user.id, issued.user.role.as_str())
                .await?;
            Ok(Json(LoginResponse {
                token: issued.token,
                user: issued.user,
            }))
        }
        Err(SessionError::InvalidCredentials) => {
            state
                .audit()
                .log_login_failed(&req.email, "invalid credentials")
                .await?;
            Err(ApiError::Session(SessionError::InvalidCredentials))
        }
        Err(e) => Err(e.into()),
    }
}

/// `POST /api/logout`
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let Some(token) = bearer_token(&headers) else {
        return Err(ApiError::Unauthenticated);
    };
    let user = gate(
        &state,
        &headers,
        AccessRequirement::authenticated(),
        "POST /api/logout",
    )
    .await?;

    state.sessions().logout(&token).await?;
    state
        .audit()
        .log_logout(&user.id, user.role.as_str())
        .await?;

    Ok(Json(json!({ "status": "signed_out" })))
}

/// `POST /api/refresh`
///
/// Re-fetches the profile from the identity directory. A rejected token
/// tears the session down and forces a re-login.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>, ApiError> {
    if !state.sessions().is_ready() {
        return Err(ApiError::Deferred);
    }
    let Some(token) = bearer_token(&headers) else {
        return Err(ApiError::Unauthenticated);
    };

    // Resolve the cached identity first so a teardown can be attributed.
    let before = state.sessions().resolve(Some(&token)).await;

    match state.sessions().refresh(&token).await {
        SessionSnapshot::Authenticated(user) => Ok(Json(user)),
        SessionSnapshot::Anonymous => {
            if let Some(user) = before.user() {
                state
                    .audit()
                    .log_session_revoked(&user.id, user.role.as_str())
                    .await?;
            }
            Err(ApiError::Unauthenticated)
        }
        SessionSnapshot::Loading => Err(ApiError::Deferred),
    }
}

/// `GET /api/profile`
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>, ApiError> {
    let user = gate(
        &state,
        &headers,
        AccessRequirement::authenticated(),
        "GET /api/profile",
    )
    .await?;
    Ok(Json(user))
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub entries: Vec<MenuEntry>,
    /// True when the reduced overview subset was substituted.
    pub fallback: bool,
}

/// `GET /api/menu`
pub async fn menu(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MenuResponse>, ApiError> {
    let user = gate(
        &state,
        &headers,
        AccessRequirement::role(Role::Admin),
        "GET /api/menu",
    )
    .await?;

    // A back-office account with no management grants at all still gets a
    // reduced overview subset instead of a bare dashboard link. Presentation
    // concern only; the permission model is not consulted for the fallback.
    let has_management = PermissionKey::ALL
        .iter()
        .any(|&key| key != PermissionKey::Dashboard && has_permission(Some(&user), key));

    if has_management {
        Ok(Json(MenuResponse {
            entries: visible_menu(Some(&user), state.menu_entries()),
            fallback: false,
        }))
    } else {
        Ok(Json(MenuResponse {
            entries: fallback_entries(),
            fallback: true,
        }))
    }
}

/// The reduced subset shown to permissionless back-office accounts.
pub fn fallback_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Overview", "/admin", None),
        MenuEntry::new("My account", "/admin/account", None),
        MenuEntry::new("Help", "/admin/help", None),
    ]
}

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub actor: Option<String>,
    pub event_type: Option<AuditEventType>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

/// `GET /api/audit`
pub async fn audit_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AuditQuery>,
) -> Result<Json<Vec<AuditEvent>>, ApiError> {
    gate(
        &state,
        &headers,
        AccessRequirement::role(Role::Admin).and_permission(PermissionKey::AdminManagement),
        "GET /api/audit",
    )
    .await?;

    let filter = AuditFilter {
        actor: query.actor,
        event_type: query.event_type,
        start_time: query.from,
        end_time: query.to,
        offset: query.offset,
        limit: Some(query.limit.unwrap_or(AUDIT_QUERY_LIMIT)),
    };

    Ok(Json(state.audit().query(filter).await?))
}

/// `GET /healthz`
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
