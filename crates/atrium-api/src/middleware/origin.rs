//! Origin allow-list enforcement.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use super::EdgePolicy;

/// Rejects browser requests from origins outside the allow-list.
///
/// Requests without an `Origin` header (same-origin navigation, curl,
/// server-to-server callers) pass through untouched. Disallowed origins are
/// answered with 403 before any handler runs, so no handler side effects can
/// occur for them.
pub async fn origin_guard(State(policy): State<EdgePolicy>, req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).and_then(|v| v.to_str().ok());

    match origin {
        None => next.run(req).await,
        Some(origin) if policy.origin_allowed(origin) => next.run(req).await,
        Some(origin) => {
            warn!(origin, path = %req.uri().path(), "Rejected request from disallowed origin");
            (StatusCode::FORBIDDEN, "origin not allowed").into_response()
        },
    }
}

/// Builds the CORS response layer from the same allow-list the guard uses.
pub fn cors_layer(policy: &EdgePolicy) -> CorsLayer {
    let origins: Vec<HeaderValue> =
        policy.allowed_origins.iter().filter_map(|origin| origin.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
