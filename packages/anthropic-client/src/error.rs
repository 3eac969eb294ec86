//! Failures of a Messages API call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnthropicError>;

#[derive(Debug, Error)]
pub enum AnthropicError {
    /// Request never got a response (connect, TLS, timeout)
    #[error("request to Messages API failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response. `kind` is the error envelope's `type`, or
    /// `"unknown"` when the body was not an envelope.
    #[error("Messages API returned HTTP {status} ({kind}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    /// 2xx response whose body is not a Messages response
    #[error("malformed Messages API response: {0}")]
    Decode(#[source] reqwest::Error),
}

