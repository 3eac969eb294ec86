//! Typed errors for the case tracker.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the CLI can decide
//! which failures end a cycle and which end the process.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from fetching the listing page or a case page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Errors from the durable record stores.
///
/// A missing file is not an error; these are the unrecoverable local
/// storage failures (permissions, full disk, corrupt JSON).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not a valid record array
    #[error("malformed records in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures at the translation boundary.
///
/// Every variant is recoverable at the cycle level: the slug stays
/// untranslated and a later run may pick it again.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Source page could not be fetched
    #[error("failed to fetch source page: {0}")]
    Fetch(#[from] FetchError),

    /// Translation API call failed
    #[error("translation API failed: {0}")]
    Api(#[from] anthropic_client::AnthropicError),

    /// External command failed to run or exited unsuccessfully
    #[error("translation command failed: {0}")]
    Command(String),

    /// Backend reported success but returned nothing
    #[error("translator returned empty content for {url}")]
    EmptyContent { url: String },
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but cannot be parsed
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Variable required by the selected backend is missing
    #[error("{0} must be set")]
    Missing(&'static str),

    /// HTTP client for the selected backend could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for translation operations.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;
