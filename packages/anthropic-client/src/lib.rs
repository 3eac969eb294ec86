//! Pure Anthropic Messages REST API client
//!
//! A clean, minimal client for the Anthropic API with no domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, Message, MessagesRequest};
//!
//! let client = AnthropicClient::new(api_key);
//!
//! let response = client
//!     .messages(
//!         MessagesRequest::new("claude-sonnet-4-5-20250929")
//!             .max_tokens(1024)
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// API version header value sent with every request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Pure Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com/v1".to_string(),
        }
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with a request timeout.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a Messages API request and collect the text of the reply.
    pub async fn messages(&self, request: MessagesRequest) -> Result<MessagesResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (kind, message) = match serde_json::from_str::<types::ErrorEnvelope>(&body) {
                Ok(envelope) => (envelope.error.kind, envelope.error.message),
                Err(_) => ("unknown".to_string(), body),
            };
            warn!(status = %status, kind = %kind, error = %message, "Anthropic API error");
            return Err(AnthropicError::Api {
                status: status.as_u16(),
                kind,
                message,
            });
        }

        let raw: types::MessagesResponseRaw = response
            .json()
            .await
            .map_err(AnthropicError::Decode)?;

        let response = raw.into_response();

        debug!(
            model = %request.model,
            stop_reason = ?response.stop_reason,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic messages call"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AnthropicClient::new("sk-ant-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "sk-ant-test");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }
}
