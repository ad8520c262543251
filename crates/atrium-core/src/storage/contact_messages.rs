//! Repository for contact-form submissions.

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::{
    error::Result,
    models::{ContactMessage, NewContactMessage},
};

/// Repository for the `contact_messages` table.
pub struct Repository {
    pool: Arc<MySqlPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self { pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<MySqlPool> {
        self.pool.clone()
    }

    /// Inserts a contact-form submission and returns its row id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the insert fails.
    pub async fn insert(&self, submission: &NewContactMessage) -> Result<u64> {
        let result = sqlx::query(
            r"
            INSERT INTO contact_messages (name, email, phone, service, message)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.service)
        .bind(&submission.message)
        .execute(&*self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    /// Counts stored contact messages.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages").fetch_one(&*self.pool).await?;

        Ok(count.0)
    }

    /// Returns the most recently stored contact messages, newest first.
    ///
    /// Operational helper; the HTTP surface has no read-back endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_recent(&self, limit: i64) -> Result<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactMessage>(
            r"
            SELECT id, name, email, phone, service, message, created_at
            FROM contact_messages
            ORDER BY id DESC
            LIMIT ?
            ",
        )
        .bind(limit)
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows)
    }
}
