//! Repository for feedback submissions.

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::{
    error::Result,
    models::{Feedback, NewFeedback},
};

/// Repository for the `feedback` table.
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

    /// Inserts a feedback submission and returns its row id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the insert fails.
    pub async fn insert(&self, submission: &NewFeedback) -> Result<u64> {
        let result = sqlx::query(
            r"
            INSERT INTO feedback (name, role, company, rating, message)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&submission.name)
        .bind(&submission.role)
        .bind(&submission.company)
        .bind(submission.rating)
        .bind(&submission.message)
        .execute(&*self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    /// Counts stored feedback rows.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM feedback").fetch_one(&*self.pool).await?;

        Ok(count.0)
    }

    /// Returns the most recently stored feedback, newest first.
    ///
    /// Operational helper; the HTTP surface has no read-back endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn find_recent(&self, limit: i64) -> Result<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, Feedback>(
            r"
            SELECT id, name, role, company, rating, message, created_at
            FROM feedback
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
