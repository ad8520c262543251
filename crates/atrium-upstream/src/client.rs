//! Shared HTTP client configuration for outbound calls.

use std::time::Duration;

use crate::error::{Result, UpstreamError};

/// Configuration for outbound HTTP clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout applied to each outbound request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(10), user_agent: "Atrium/1.0".to_string() }
    }
}

impl ClientConfig {
    /// Builds a reqwest client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Configuration` if the client cannot be built.
    pub fn build(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| UpstreamError::configuration(format!("failed to build HTTP client: {e}")))
    }

    /// Maps a reqwest transport error into the upstream taxonomy.
    pub(crate) fn categorize(&self, err: &reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::timeout(self.timeout.as_secs())
        } else if err.is_connect() {
            UpstreamError::network(format!("connection failed: {err}"))
        } else {
            UpstreamError::network(err.to_string())
        }
    }
}
