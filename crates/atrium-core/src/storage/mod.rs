//! Database access layer for the site's append-only tables.
//!
//! Repositories translate between domain models and the schema. All database
//! operations go through this module; handlers never issue SQL directly.

use std::sync::Arc;

use sqlx::MySqlPool;

pub mod contact_messages;
pub mod feedback;
mod pool;

pub use pool::{connect_with_retry, PoolSettings};

use crate::error::Result;

/// Container for the repository instances sharing one connection pool.
///
/// Constructed once during bootstrap and passed into every handler by value;
/// nothing captures the pool from enclosing scope, so tests can substitute a
/// pool of their own.
#[derive(Clone)]
pub struct Storage {
    /// Repository for contact-form submissions.
    pub contact_messages: Arc<contact_messages::Repository>,
    /// Repository for feedback submissions.
    pub feedback: Arc<feedback::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        let pool = Arc::new(pool);

        Self {
            contact_messages: Arc::new(contact_messages::Repository::new(pool.clone())),
            feedback: Arc::new(feedback::Repository::new(pool)),
        }
    }

    /// Performs a liveness check on the database connection.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the probe query fails.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.contact_messages.pool()).await?;

        Ok(())
    }
}

/// Creates the site's tables if they do not exist yet.
///
/// Idempotent; runs at every startup before the server binds.
///
/// # Errors
///
/// Returns `CoreError::Database` if a DDL statement fails.
pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(120) NOT NULL,
            email VARCHAR(254) NOT NULL,
            phone VARCHAR(32) NULL,
            service VARCHAR(120) NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS feedback (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(120) NOT NULL,
            role VARCHAR(120) NULL,
            company VARCHAR(160) NULL,
            rating INT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_can_be_created() {
        // Lazy pool: nothing connects until a query runs. Full database
        // behavior is covered by the integration tests.
        let pool = MySqlPool::connect_lazy("mysql://root@localhost/atrium_test").unwrap();
        let _storage = Storage::new(pool);
    }
}
