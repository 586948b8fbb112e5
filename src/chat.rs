//! Chat Assistant Client
//!
//! Proxies chat requests to an OpenAI-compatible completion endpoint.
//! The proxy is a pure passthrough: the provider's JSON body is
//! returned to the caller unchanged. Without an API key the client
//! runs in demo mode and answers with a canned reply shaped like a
//! real completion.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::models::ChatMessage;

// == Constants ==
/// Completion model requested when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Upstream chat-completions endpoint.
const COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Upstream calls are cut off after this long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEMO_REPLY: &str = "The assistant is running in demo mode because no provider \
    API key is configured. Set GROQ_API_KEY to enable live responses.";

// == Chat Client ==
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ChatClient {
    // == Constructor ==
    /// Creates a client; a missing key enables demo mode.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: COMPLETIONS_URL.to_string(),
        }
    }

    /// Returns true when a provider key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    // == Completion ==
    /// Sends the conversation upstream and returns the provider's JSON
    /// body verbatim.
    ///
    /// Transport failures, timeouts, and non-2xx provider responses all
    /// surface as `ApiError::Upstream`; nothing is retried here.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
    ) -> Result<Value> {
        let Some(api_key) = &self.api_key else {
            return Ok(Self::demo_reply());
        };

        let body = json!({
            "messages": messages,
            "model": model.unwrap_or(DEFAULT_MODEL),
            "temperature": 0.7,
            "max_tokens": 1024,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                warn!("chat provider request failed: {}", err);
                ApiError::Upstream(format!("chat provider request failed: {}", err))
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "chat provider returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Upstream(format!("invalid provider response: {}", err)))
    }

    /// Canned reply served in demo mode, shaped like a completion so
    /// clients need no special casing.
    fn demo_reply() -> Value {
        json!({
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": DEMO_REPLY,
                    }
                }
            ]
        })
    }
}
