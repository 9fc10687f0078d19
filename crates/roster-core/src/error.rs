//! Error types for roster-core

use thiserror::Error;

/// Result type alias using roster-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roster-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connection refused, DNS, timeout)
    #[error("Directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Directory API returned a non-success status
    #[error("Directory API error: {message} ({status})")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid directory payload: {0}")]
    InvalidPayload(String),

    /// Draft rejected before submission
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
