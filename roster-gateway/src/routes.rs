//! Axum route handlers for the roster API.

use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use roster_core::ActivityRegistry;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Registry = Arc<ActivityRegistry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query parameters for signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// Confirmation returned by signup and unregister.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given registry and static asset
/// directory.
pub fn create_router(registry: Registry, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — send browsers to the frontend page.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /activities` — full registry snapshot as a name-to-activity map,
/// in seed order.
pub async fn list_activities(State(registry): State<Registry>) -> impl IntoResponse {
    Json(registry.snapshot())
}

/// `POST /activities/{name}/signup?email=...` — add a student to an
/// activity. The path segment is percent-decoded, so names with spaces
/// (e.g. `Chess Club`) work as opaque keys.
///
/// # Errors
/// Returns 404 if the activity does not exist, or 400 if the email is
/// already signed up.
pub async fn signup(
    State(registry): State<Registry>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, GatewayError> {
    registry.signup(&name, &params.email)?;
    tracing::info!(activity = %name, email = %params.email, "signup");
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {name}", params.email),
    }))
}

/// `DELETE /activities/{name}/unregister?email=...` — remove a student
/// from an activity.
///
/// # Errors
/// Returns 404 if the activity does not exist, or 400 if the email is
/// not signed up.
pub async fn unregister(
    State(registry): State<Registry>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, GatewayError> {
    registry.unregister(&name, &params.email)?;
    tracing::info!(activity = %name, email = %params.email, "unregister");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {name}", params.email),
    }))
}
