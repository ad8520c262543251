//! Client for the hosted completion API behind the site's chat box.
//!
//! The wire contract never surfaces an upstream failure: callers always get a
//! reply string. Outcomes are tagged so the logs can tell an answered request
//! from a served fallback.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
    client::ClientConfig,
    error::{Result, UpstreamError},
    prompt::SYSTEM_PROMPT,
};

/// Fixed reply served when the completion service fails outright.
pub const SERVICE_ERROR_REPLY: &str = "Sorry, AI service error.";

/// Fixed reply served when the service answers without a usable completion.
pub const EMPTY_COMPLETION_REPLY: &str = "Sorry, I could not come up with a response.";

/// Outcome of one chat exchange.
///
/// The HTTP layer renders both variants as a 200 response; the distinction
/// exists for the logs.
#[derive(Debug)]
pub enum ChatReply {
    /// The upstream produced a completion.
    Answer(String),
    /// A fixed fallback was substituted.
    Fallback {
        /// Why the fallback was served.
        reason: FallbackReason,
    },
}

/// Why a fallback reply was served.
#[derive(Debug)]
pub enum FallbackReason {
    /// Upstream answered successfully but returned no completion text.
    EmptyCompletion,
    /// The outbound call failed.
    Upstream(UpstreamError),
}

impl ChatReply {
    /// Renders the wire-level reply text.
    pub fn into_text(self) -> String {
        match self {
            Self::Answer(text) => text,
            Self::Fallback { reason: FallbackReason::EmptyCompletion } => {
                EMPTY_COMPLETION_REPLY.to_string()
            },
            Self::Fallback { reason: FallbackReason::Upstream(_) } => {
                SERVICE_ERROR_REPLY.to_string()
            },
        }
    }

    /// True when a fallback was substituted for a real completion.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the chat-completion service.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: reqwest::Client,
    config: ClientConfig,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AssistantClient {
    /// Creates a new assistant client.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(
        config: ClientConfig,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self> {
        let client = config.build()?;

        Ok(Self {
            client,
            config,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        })
    }

    /// Sends a visitor message and always produces a reply.
    ///
    /// Upstream failures are logged and converted into the fixed fallback;
    /// this call never errors.
    pub async fn ask(&self, message: &str) -> ChatReply {
        match self.complete(message).await {
            Ok(Some(text)) => ChatReply::Answer(text),
            Ok(None) => {
                warn!("Completion response contained no usable choice");
                ChatReply::Fallback { reason: FallbackReason::EmptyCompletion }
            },
            Err(e) => {
                error!(error = %e, "Completion request failed");
                ChatReply::Fallback { reason: FallbackReason::Upstream(e) }
            },
        }
    }

    /// Performs one completion call: fixed system prompt plus the raw visitor
    /// message, bounded by the configured output-token budget.
    async fn complete(&self, message: &str) -> Result<Option<String>> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message { role: "system", content: SYSTEM_PROMPT },
                Message { role: "user", content: message },
            ],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.config.categorize(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::malformed(format!("completion body: {e}")))?;

        // The full upstream response goes to the log for operator visibility.
        debug!(status = status.as_u16(), body = %body, "Completion upstream response");

        if !status.is_success() {
            return Err(UpstreamError::unexpected_status(status.as_u16(), body));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::malformed(format!("completion body: {e}")))?;

        Ok(parsed.choices.into_iter().next().and_then(|choice| choice.message.content))
    }
}
