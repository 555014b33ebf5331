//! Remote sync error types

use thiserror::Error;

/// Result type for remote operations
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Errors that can occur during remote sync
#[derive(Debug, Error)]
pub enum RemoteError {
    /// A required configuration field is missing
    #[error("Missing remote configuration: {0}")]
    MissingConfig(&'static str),

    /// The existence check returned an unexpected status
    #[error("Unexpected status {0} checking remote file")]
    Protocol(u16),

    /// The remote API rejected the write; message is passed through
    /// verbatim from the response body
    #[error("Remote error: {0}")]
    Remote(String),

    /// Network/transport failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
