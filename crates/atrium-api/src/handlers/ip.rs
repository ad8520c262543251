//! Public-IP lookup proxy handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::server::AppState;

/// Fixed plain-text body for lookup failures.
const LOOKUP_FAILED: &str = "Unable to determine public IP";

/// Handles `GET /get-ip`.
///
/// Proxies one lookup call and returns the bare address as `text/plain`.
/// Any upstream failure maps to a 500 with a fixed plain-text message.
#[instrument(name = "get_ip", skip(state))]
pub async fn get_ip(State(state): State<AppState>) -> Response {
    match state.ip_lookup.lookup().await {
        Ok(ip) => (StatusCode::OK, ip).into_response(),
        Err(e) => {
            error!(error = %e, "IP lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED).into_response()
        },
    }
}
