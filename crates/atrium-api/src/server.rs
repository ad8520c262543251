//! HTTP server assembly: shared state, routes, middleware, lifecycle.
//!
//! Requests pass through the edge policy before any handler runs:
//! 1. Request-id injection
//! 2. Request/response tracing
//! 3. HTTPS enforcement (production only)
//! 4. Origin guard
//! 5. Timeout enforcement
//! 6. CORS response headers
//! 7. Handler execution

use std::net::SocketAddr;

use anyhow::Result;
use atrium_core::Storage;
use atrium_upstream::{AssistantClient, IpLookupClient};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers,
    middleware::{cors_layer, https_redirect, inject_request_id, origin_guard, EdgePolicy},
};

/// Shared state injected into every handler.
///
/// Built once during bootstrap; handlers never capture collaborators from
/// enclosing scope.
#[derive(Clone)]
pub struct AppState {
    /// Database access layer.
    pub storage: Storage,
    /// Chat-completion client.
    pub assistant: AssistantClient,
    /// Public-IP lookup client.
    pub ip_lookup: IpLookupClient,
    /// Edge policy derived from configuration.
    pub policy: EdgePolicy,
}

impl AppState {
    /// Builds the application state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an outbound HTTP client cannot be constructed.
    pub fn from_config(config: &Config, storage: Storage) -> Result<Self> {
        let assistant = AssistantClient::new(
            config.client_config(),
            config.chat_api_url.clone(),
            config.openai_api_key.clone(),
            config.chat_model.clone(),
            config.chat_max_tokens,
        )?;
        let ip_lookup = IpLookupClient::new(config.client_config(), config.ip_api_url.clone())?;
        let policy = EdgePolicy::from_config(config);

        Ok(Self { storage, assistant, ip_lookup, policy })
    }
}

/// Creates the router with all routes and the edge-policy middleware stack.
pub fn create_router(state: AppState) -> Router {
    let policy = state.policy.clone();

    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/feedback", post(handlers::submit_feedback))
        .route("/get-ip", get(handlers::get_ip))
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health_check))
        .layer(cors_layer(&policy))
        .layer(TimeoutLayer::new(policy.request_timeout))
        .layer(from_fn_with_state(policy.clone(), origin_guard))
        .layer(from_fn_with_state(policy, https_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(inject_request_id))
        .with_state(state)
}

/// Starts the HTTP server and runs until a shutdown signal arrives.
///
/// # Errors
///
/// Returns `std::io::Error` if the address cannot be bound or the server
/// fails while running.
pub async fn start_server(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
