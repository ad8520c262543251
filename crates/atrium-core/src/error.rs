//! Error types for storage operations.
//!
//! Startup-fatal conditions (database unreachable after bounded retries) are
//! distinguished from request-level database failures, which are reported to
//! callers as a generic envelope while the full cause stays in the logs.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for storage operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// The database stayed unreachable through every connect attempt.
    ///
    /// This is a fatal startup condition: the process logs the cause and
    /// exits non-zero rather than serve requests without storage.
    #[error("database unreachable after {attempts} attempts: {last_error}")]
    ConnectionExhausted {
        /// Number of connect attempts made before giving up.
        attempts: u32,
        /// The failure reported by the final attempt.
        last_error: String,
    },
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_reports_attempt_count_and_cause() {
        let err = CoreError::ConnectionExhausted {
            attempts: 10,
            last_error: "connection refused".to_string(),
        };

        assert_eq!(err.to_string(), "database unreachable after 10 attempts: connection refused");
    }

    #[test]
    fn database_errors_carry_their_message() {
        let err = CoreError::Database("duplicate entry".to_string());
        assert_eq!(err.to_string(), "database error: duplicate entry");
    }
}
