//! Shared response envelopes for the submission handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SubmissionAck {
    success: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Success envelope: `{"success": true}` with 200.
pub fn success() -> Response {
    (StatusCode::OK, Json(SubmissionAck { success: true })).into_response()
}

/// Fixed failure envelope for database errors.
///
/// The body never carries the underlying cause; that stays in the logs.
pub fn database_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: "Database connection failed" }))
        .into_response()
}
