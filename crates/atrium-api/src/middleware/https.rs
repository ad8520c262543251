//! HTTPS enforcement behind a TLS-terminating proxy.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::EdgePolicy;

/// Redirects plain-HTTP requests to their HTTPS equivalent in production.
///
/// Only the `x-forwarded-proto` header set by the fronting proxy is
/// consulted; the connection's own protocol is never inspected. Outside
/// production this middleware passes everything through.
pub async fn https_redirect(State(policy): State<EdgePolicy>, req: Request, next: Next) -> Response {
    if !policy.enforce_https {
        return next.run(req).await;
    }

    let forwarded_proto = req.headers().get("x-forwarded-proto").and_then(|v| v.to_str().ok());

    if forwarded_proto == Some("http") {
        if let Some(host) = req.headers().get(header::HOST).and_then(|v| v.to_str().ok()) {
            let path_and_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
            let target = format!("https://{host}{path_and_query}");

            debug!(target, "Redirecting plain-HTTP request");
            return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response();
        }
    }

    next.run(req).await
}
