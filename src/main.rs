//! Atrium marketing-site backend.
//!
//! Entry point for the server. Loads configuration, establishes the database
//! pool with bounded retry, runs migrations, and serves the HTTP API until a
//! shutdown signal arrives.

use std::net::SocketAddr;

use anyhow::Context;
use atrium_api::{AppState, Config};
use atrium_core::{storage, Storage};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Atrium site backend");

    let config = Config::load()?;
    info!(
        database = %config.database_url_masked(),
        port = config.port,
        environment = %config.app_env,
        "Configuration loaded"
    );

    // An unreachable database after every configured attempt is fatal; there
    // is nothing to serve without storage.
    let pool = match storage::connect_with_retry(&config.pool_settings()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Could not establish a database connection, giving up");
            std::process::exit(1);
        },
    };
    info!("Database connection pool established");

    storage::run_migrations(&pool).await.context("failed to run database migrations")?;
    info!("Database migrations completed");

    let state = AppState::from_config(&config, Storage::new(pool))?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    atrium_api::start_server(state, addr).await?;

    info!("Atrium shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,atrium=debug,tower_http=debug"))
        .expect("invalid RUST_LOG environment variable");

    tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(true)).init();
}
