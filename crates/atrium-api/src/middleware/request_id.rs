//! Request-id injection for tracing.

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Tags each request with an id and echoes it as `X-Request-Id`.
pub async fn inject_request_id(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", value);
    }

    response
}
