//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::time::Duration;

use atrium_api::{create_router, AppState, Config};
use atrium_core::Storage;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use sqlx::mysql::MySqlPoolOptions;
use tower::ServiceExt;

/// Dev origin that the default test configuration allows.
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Builds a test configuration pointing both upstreams at the given URLs.
///
/// The database settings aim at a closed local port, so router tests built
/// from this configuration exercise the broken-database paths unless a real
/// pool is substituted.
pub fn test_config(chat_url: &str, ip_url: &str) -> Config {
    let mut config = Config::default();
    config.db_host = "127.0.0.1".to_string();
    config.db_port = 59995;
    config.database_acquire_timeout = 1;
    config.openai_api_key = "test-key".to_string();
    config.chat_api_url = chat_url.to_string();
    config.ip_api_url = ip_url.to_string();
    config.upstream_timeout = 2;
    config
}

/// Builds a router around the given configuration with a lazy pool.
pub fn test_app(config: &Config) -> Router {
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout))
        .connect_lazy(&config.database_url())
        .expect("pool options should parse");

    let state = AppState::from_config(config, Storage::new(pool)).expect("state should build");
    create_router(state)
}

/// Sends a JSON POST through the router.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

/// Sends a GET through the router.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request =
        Request::builder().method("GET").uri(path).body(Body::empty()).expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

/// Reads a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Reads a response body as a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Stubs a completion upstream that answers with the given text.
pub async fn mock_completion(server: &wiremock::MockServer, text: &str) {
    wiremock::Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path("/v1/chat/completions"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [ { "message": { "role": "assistant", "content": text } } ]
        })))
        .mount(server)
        .await;
}

/// Returns the completion URL for a mock server.
pub fn chat_url(server: &wiremock::MockServer) -> String {
    format!("{}/v1/chat/completions", server.uri())
}
