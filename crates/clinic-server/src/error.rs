//! Error types for the HTTP service.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use clinic_audit::AuditError;
use clinic_authz::DenyReason;
use clinic_session::SessionError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The initial session check has not completed; the client should retry.
    #[error("authorization is still initializing")]
    Deferred,

    /// No user is signed in.
    #[error("unauthenticated")]
    Unauthenticated,

    /// A user is signed in but lacks the required role or permission.
    #[error("forbidden")]
    Forbidden,

    /// Session error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Audit error.
    #[error("audit error: {0}")]
    Audit(#[from] AuditError),
}

impl From<DenyReason> for ApiError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::Unauthenticated => ApiError::Unauthenticated,
            DenyReason::Forbidden => ApiError::Forbidden,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Deferred => (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::RETRY_AFTER, "1")],
                Json(json!({ "error": "initializing" })),
            )
                .into_response(),
            ApiError::Unauthenticated => deny_response(
                StatusCode::UNAUTHORIZED,
                DenyReason::Unauthenticated,
            ),
            ApiError::Forbidden => deny_response(StatusCode::FORBIDDEN, DenyReason::Forbidden),
            ApiError::Session(SessionError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "invalid_credentials" })),
            )
                .into_response(),
            ApiError::Session(SessionError::DirectoryUnavailable(e)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": format!("identity directory unavailable: {e}") })),
            )
                .into_response(),
            ApiError::Session(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            ApiError::Audit(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
        }
    }
}

fn deny_response(status: StatusCode, reason: DenyReason) -> Response {
    (
        status,
        Json(json!({
            "error": reason.to_string(),
            "redirect": reason.redirect_target(),
        })),
    )
        .into_response()
}
