//! Client for the public-IP lookup service.

use serde::Deserialize;
use tracing::debug;

use crate::{
    client::ClientConfig,
    error::{Result, UpstreamError},
};

/// Response shape of the IP lookup service.
#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Client for the third-party public-IP lookup endpoint.
#[derive(Debug, Clone)]
pub struct IpLookupClient {
    client: reqwest::Client,
    config: ClientConfig,
    endpoint: String,
}

impl IpLookupClient {
    /// Creates a new lookup client against the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig, endpoint: impl Into<String>) -> Result<Self> {
        let client = config.build()?;

        Ok(Self { client, config, endpoint: endpoint.into() })
    }

    /// Fetches the public IP as reported by the upstream.
    ///
    /// One outbound call, no retry.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the upstream answers with a
    /// non-success status, or the body is not the expected JSON shape.
    pub async fn lookup(&self) -> Result<String> {
        let response =
            self.client.get(&self.endpoint).send().await.map_err(|e| self.config.categorize(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::unexpected_status(status.as_u16(), body));
        }

        let body: IpResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::malformed(format!("ip lookup body: {e}")))?;

        debug!(ip = %body.ip, "IP lookup succeeded");
        Ok(body.ip)
    }
}
