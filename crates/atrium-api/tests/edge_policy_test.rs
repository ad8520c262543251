//! Edge policy: origin allow-list and HTTPS enforcement.

mod common;

use atrium_api::Environment;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, chat_url, mock_completion, post_json, test_app, test_config, ALLOWED_ORIGIN};
use serde_json::json;
use tower::ServiceExt;
use wiremock::MockServer;

#[tokio::test]
async fn disallowed_origin_is_rejected_before_the_handler() {
    let config = test_config("http://127.0.0.1:1/chat", "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::ORIGIN, "https://evil.example")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // A request that reached the handler would answer 200 or 500; 403 proves
    // the guard cut it off first, so no insert was attempted.
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn requests_without_an_origin_header_pass() {
    let server = MockServer::start().await;
    mock_completion(&server, "ok").await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let response = post_json(app, "/chat", json!({"message": "hi"})).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn allowed_origin_passes_and_receives_cors_headers() {
    let server = MockServer::start().await;
    mock_completion(&server, "ok").await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"message": "hi"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
    assert_eq!(body_json(response).await, json!({"reply": "ok"}));
}

#[tokio::test]
async fn production_redirects_forwarded_plain_http() {
    let mut config = test_config("http://127.0.0.1:1/chat", "http://127.0.0.1:1/ip");
    config.app_env = Environment::Production;
    let app = test_app(&config);

    let request = Request::builder()
        .method("GET")
        .uri("/get-ip")
        .header(header::HOST, "www.atriumstudio.dev")
        .header("x-forwarded-proto", "http")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://www.atriumstudio.dev/get-ip")
    );
}

#[tokio::test]
async fn production_passes_forwarded_https_through() {
    let server = MockServer::start().await;
    mock_completion(&server, "ok").await;

    let mut config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    config.app_env = Environment::Production;
    let app = test_app(&config);

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::HOST, "www.atriumstudio.dev")
        .header("x-forwarded-proto", "https")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"message": "hi"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn development_mode_does_not_redirect() {
    let server = MockServer::start().await;
    mock_completion(&server, "ok").await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::HOST, "localhost:4000")
        .header("x-forwarded-proto", "http")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"message": "hi"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
