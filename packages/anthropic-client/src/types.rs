//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Messages
// =============================================================================

/// Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model to use (e.g., "claude-sonnet-4-5-20250929")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Conversation messages
    pub messages: Vec<Message>,
}

impl Default for MessagesRequest {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 4096,
            system: None,
            messages: Vec::new(),
        }
    }
}

impl MessagesRequest {
    /// Create a new request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the system prompt.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role; requests from this client only send "user"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Messages API response, reduced to the text the caller needs.
#[derive(Debug, Clone)]
pub struct MessagesResponse {
    /// Concatenated text blocks
    pub text: String,

    /// Why generation stopped ("end_turn", "max_tokens", ...)
    pub stop_reason: Option<String>,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponseRaw {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A single content block. Only text blocks carry output we use.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl MessagesResponseRaw {
    pub(crate) fn into_response(self) -> MessagesResponse {
        let text = self
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        MessagesResponse {
            text,
            stop_reason: self.stop_reason,
            usage: self.usage,
        }
    }
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub input_tokens: u32,

    /// Tokens in the completion
    pub output_tokens: u32,
}
