//! Connection-pool bootstrap with bounded retry.
//!
//! The pool waits for a free slot when exhausted rather than failing the
//! caller outright. Startup probes the database until it answers or the
//! configured attempts run out; exhaustion is a fatal condition surfaced to
//! `main`.

use std::time::Duration;

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use tracing::{info, warn};

use crate::error::{CoreError, Result};

/// Settings for the database connection pool and its startup probe.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long an acquire may wait for a free slot.
    pub acquire_timeout: Duration,
    /// Number of liveness probes to attempt at startup.
    pub connect_retries: u32,
    /// Fixed delay between probes.
    pub retry_delay: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            url: "mysql://root@localhost:3306/atrium".to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            connect_retries: 10,
            retry_delay: Duration::from_secs(5),
        }
    }
}

/// Builds the pool and probes the database until it answers.
///
/// Each attempt acquires a connection, runs `SELECT 1`, and releases the
/// connection back to the pool; the pool handle is returned after the first
/// successful probe. Failed attempts are logged with their ordinal and the
/// underlying cause, then retried after the fixed delay.
///
/// # Errors
///
/// Returns [`CoreError::ConnectionExhausted`] once every configured attempt
/// has failed, carrying the attempt count and the last cause. Callers treat
/// this as fatal.
pub async fn connect_with_retry(settings: &PoolSettings) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(&settings.url)?;

    let mut last_error = String::new();
    for attempt in 1..=settings.connect_retries {
        match sqlx::query("SELECT 1").execute(&pool).await {
            Ok(_) => {
                info!(attempt, "Database connection established");
                return Ok(pool);
            },
            Err(e) => {
                last_error = e.to_string();
                warn!(
                    attempt,
                    max_attempts = settings.connect_retries,
                    error = %e,
                    "Database connection attempt failed"
                );
                if attempt < settings.connect_retries {
                    tokio::time::sleep(settings.retry_delay).await;
                }
            },
        }
    }

    Err(CoreError::ConnectionExhausted { attempts: settings.connect_retries, last_error })
}
