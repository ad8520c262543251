//! Error types for outbound service calls.
//!
//! Every failure is terminal for the single request that triggered it; there
//! are no retries at this layer. The chat handler additionally converts these
//! into an in-band fallback reply rather than surfacing an error status.

use thiserror::Error;

/// Result type alias for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors from outbound calls to third-party services.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network-level connectivity failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Description of the network failure.
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Configured timeout in seconds.
        timeout_seconds: u64,
    },

    /// The service answered with a non-success status.
    #[error("unexpected status: HTTP {status_code}")]
    UnexpectedStatus {
        /// HTTP status code returned.
        status_code: u16,
        /// Response body, kept for the logs.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// Description of the parse failure.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("client configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl UpstreamError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates an unexpected-status error from an HTTP response.
    pub fn unexpected_status(status_code: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status_code, body: body.into() }
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_format() {
        assert_eq!(UpstreamError::timeout(10).to_string(), "request timeout after 10s");
        assert_eq!(
            UpstreamError::unexpected_status(502, "bad gateway").to_string(),
            "unexpected status: HTTP 502"
        );
        assert_eq!(
            UpstreamError::network("connection refused").to_string(),
            "network connection failed: connection refused"
        );
    }
}
