//! End-to-end tests for the back-office API.
//!
//! These construct the full stack (static directory, session store, audit
//! logger) and drive the handlers directly.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use clinic_audit::{AuditEventType, AuditFilter, AuditLogger};
use clinic_core::config::{DirectoryConfig, DirectoryUser};
use clinic_core::{AuditConfig, ClinicConfig, Role};
use clinic_server::handlers::{self, AuditQuery, LoginRequest};
use clinic_server::{ApiError, AppState};
use clinic_session::{IdentityProvider, SessionError, SessionStore, StaticDirectory, hash_password};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

fn account(email: &str, role: Role, grants: &[(&str, bool)]) -> DirectoryUser {
    DirectoryUser {
        id: None,
        name: email.split('@').next().unwrap_or("someone").to_string(),
        email: email.to_string(),
        role,
        password_hash: hash_password("pw").unwrap(),
        permissions: grants
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<HashMap<_, _>>(),
    }
}

fn test_stack(audit_dir: &Path) -> (AppState, Arc<SessionStore>, Arc<StaticDirectory>) {
    let config = ClinicConfig {
        directory: DirectoryConfig {
            users: vec![
                account("root@clinic.example", Role::SuperAdmin, &[]),
                account(
                    "desk@clinic.example",
                    Role::Admin,
                    &[("appointmentManagement", true)],
                ),
                account("new@clinic.example", Role::Admin, &[]),
                account("parent@clinic.example", Role::User, &[]),
            ],
        },
        audit: AuditConfig {
            enabled: true,
            directory: audit_dir.to_string_lossy().into_owned(),
            stdout: false,
        },
        ..Default::default()
    };

    let provider = Arc::new(StaticDirectory::from_config(&config.directory));
    let sessions = Arc::new(SessionStore::new(provider.clone()));
    let audit = Arc::new(AuditLogger::new(config.audit.clone()).unwrap());
    let state = AppState::new(config, sessions.clone(), audit);
    (state, sessions, provider)
}

async fn sign_in(state: &AppState, email: &str) -> String {
    let response = handlers::login(
        State(state.clone()),
        Json(LoginRequest {
            email: email.to_string(),
            password: "pw".to_string(),
        }),
    )
    .await
    .unwrap();
    response.0.token
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
    headers
}

fn audit_query() -> Query<AuditQuery> {
    Query(AuditQuery {
        actor: None,
        event_type: None,
        from: None,
        to: None,
        offset: None,
        limit: None,
    })
}

#[tokio::test]
async fn requests_defer_until_the_store_is_ready() {
    let dir = tempfile::tempdir().unwrap();
    let (state, _sessions, _) = test_stack(dir.path());

    let login = handlers::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "root@clinic.example".to_string(),
            password: "pw".to_string(),
        }),
    )
    .await;
    assert!(matches!(login, Err(ApiError::Deferred)));

    let menu = handlers::menu(State(state), HeaderMap::new()).await;
    assert!(matches!(menu, Err(ApiError::Deferred)));
}

#[tokio::test]
async fn login_and_profile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "root@clinic.example").await;
    let profile = handlers::profile(State(state.clone()), bearer(&token))
        .await
        .unwrap();
    assert_eq!(profile.0.email, "root@clinic.example");
    assert_eq!(profile.0.role, Role::SuperAdmin);

    let bad = handlers::login(
        State(state),
        Json(LoginRequest {
            email: "root@clinic.example".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await;
    assert!(matches!(
        bad,
        Err(ApiError::Session(SessionError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn anonymous_requests_are_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let menu = handlers::menu(State(state.clone()), HeaderMap::new()).await;
    assert!(matches!(menu, Err(ApiError::Unauthenticated)));

    let profile = handlers::profile(State(state), HeaderMap::new()).await;
    assert!(matches!(profile, Err(ApiError::Unauthenticated)));
}

#[tokio::test]
async fn plain_users_are_forbidden_from_admin_routes() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "parent@clinic.example").await;
    let menu = handlers::menu(State(state.clone()), bearer(&token)).await;
    assert!(matches!(menu, Err(ApiError::Forbidden)));

    // The denial is on the audit trail.
    let denied = state
        .audit()
        .query(AuditFilter {
            event_type: Some(AuditEventType::AccessDenied),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(denied.len(), 1);
    assert_eq!(denied[0].reason, Some("forbidden".to_string()));
}

#[tokio::test]
async fn admin_menu_is_filtered_by_grants() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "desk@clinic.example").await;
    let menu = handlers::menu(State(state), bearer(&token)).await.unwrap();

    assert!(!menu.0.fallback);
    let labels: Vec<&str> = menu.0.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Dashboard", "Appointments"]);
}

#[tokio::test]
async fn permissionless_admin_gets_the_fallback_subset() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "new@clinic.example").await;
    let menu = handlers::menu(State(state), bearer(&token)).await.unwrap();

    assert!(menu.0.fallback);
    assert!(!menu.0.entries.is_empty());
    assert!(menu.0.entries.iter().all(|e| e.permission.is_none()));
}

#[tokio::test]
async fn super_admin_sees_the_full_menu_and_the_audit_log() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "root@clinic.example").await;
    let menu = handlers::menu(State(state.clone()), bearer(&token))
        .await
        .unwrap();
    assert_eq!(menu.0.entries.len(), state.menu_entries().len());

    let events = handlers::audit_log(State(state), bearer(&token), audit_query())
        .await
        .unwrap();
    assert!(
        events
            .0
            .iter()
            .any(|e| e.event_type == AuditEventType::LoginSucceeded)
    );
}

#[tokio::test]
async fn audit_log_requires_the_admin_management_grant() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "desk@clinic.example").await;
    let events = handlers::audit_log(State(state), bearer(&token), audit_query()).await;
    assert!(matches!(events, Err(ApiError::Forbidden)));
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, _) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "desk@clinic.example").await;
    handlers::logout(State(state.clone()), bearer(&token))
        .await
        .unwrap();

    let profile = handlers::profile(State(state.clone()), bearer(&token)).await;
    assert!(matches!(profile, Err(ApiError::Unauthenticated)));

    let events = state
        .audit()
        .query(AuditFilter {
            event_type: Some(AuditEventType::LogoutCompleted),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn refresh_tears_down_directory_rejected_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let (state, sessions, provider) = test_stack(dir.path());
    sessions.mark_ready();

    let token = sign_in(&state, "desk@clinic.example").await;

    // The directory invalidates the token out-of-band.
    provider.revoke(&token).await.unwrap();

    let refreshed = handlers::refresh(State(state.clone()), bearer(&token)).await;
    assert!(matches!(refreshed, Err(ApiError::Unauthenticated)));

    let revoked = state
        .audit()
        .query(AuditFilter {
            event_type: Some(AuditEventType::SessionRevoked),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(revoked.len(), 1);
}
