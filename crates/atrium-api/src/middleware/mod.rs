//! Edge policy middleware applied ahead of every handler.
//!
//! One canonical policy: an explicit origin allow-list enforced before
//! dispatch, HTTPS redirection driven by the forwarded-protocol header in
//! production, and request-id injection for tracing. Body parsing happens in
//! the handlers' `Json` extractors, which reject malformed JSON before any
//! handler logic runs.

use std::time::Duration;

use crate::config::{Config, Environment};

mod https;
mod origin;
mod request_id;

pub use https::https_redirect;
pub use origin::{cors_layer, origin_guard};
pub use request_id::inject_request_id;

/// Cross-cutting request policy derived from configuration.
#[derive(Debug, Clone)]
pub struct EdgePolicy {
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
    /// Whether plain-HTTP requests are redirected to HTTPS.
    pub enforce_https: bool,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl EdgePolicy {
    /// Derives the edge policy from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_origins: config.origin_list(),
            enforce_https: config.app_env == Environment::Production,
            request_timeout: Duration::from_secs(config.request_timeout),
        }
    }

    /// Whether the given `Origin` header value is on the allow-list.
    ///
    /// Exact string comparison; scheme and port are part of the origin.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
