//! Chat proxy contract: always 200, fallback on upstream failure.

mod common;

use axum::http::StatusCode;
use common::{body_json, chat_url, mock_completion, post_json, test_app, test_config};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn returns_the_completion_text() {
    let server = MockServer::start().await;
    mock_completion(&server, "We design and build web products.").await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let response = post_json(app, "/chat", json!({"message": "What services do you offer?"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"reply": "We design and build web products."}));
}

#[tokio::test]
async fn upstream_error_yields_the_fixed_fallback_with_200() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let response = post_json(app, "/chat", json!({"message": "hi"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"reply": "Sorry, AI service error."}));
}

#[tokio::test]
async fn unreachable_upstream_yields_the_fixed_fallback_with_200() {
    let config =
        test_config("http://127.0.0.1:59996/v1/chat/completions", "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let response = post_json(app, "/chat", json!({"message": "hi"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"reply": "Sorry, AI service error."}));
}

#[tokio::test]
async fn missing_message_defaults_to_the_empty_string() {
    let server = MockServer::start().await;
    mock_completion(&server, "ok").await;

    let config = test_config(&chat_url(&server), "http://127.0.0.1:1/ip");
    let app = test_app(&config);

    let response = post_json(app, "/chat", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["messages"][1]["content"], "");
}
