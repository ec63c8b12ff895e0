//! Route definitions for the back-office API.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/profile", get(handlers::profile))
        .route("/api/menu", get(handlers::menu))
        .route("/api/audit", get(handlers::audit_log))
        .layer(TraceLayer::new_for_http())
        // The public site is served separately and calls this API cross-origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
