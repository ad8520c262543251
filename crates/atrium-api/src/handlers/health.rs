//! Health endpoint for deployment monitoring.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::server::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Database probe result: `up` or `down`.
    pub database: &'static str,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

/// Handles `GET /health`.
///
/// Runs the storage liveness probe; degraded storage turns the response 503.
/// Cheap enough to be polled by load balancers.
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.storage.health_check().await {
        Ok(()) => {
            debug!("Health check passed");
            let body =
                HealthResponse { status: "healthy", database: "up", timestamp: Utc::now() };
            (StatusCode::OK, Json(body)).into_response()
        },
        Err(e) => {
            error!(error = %e, "Health check failed");
            let body =
                HealthResponse { status: "unhealthy", database: "down", timestamp: Utc::now() };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        },
    }
}
