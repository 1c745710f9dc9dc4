// Rust guideline compliant 2026-02-06

//! Error types for the Dohas core library.

use thiserror::Error;

/// Result type alias for Dohas operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Dohas operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid challenge data.
    #[error("Invalid challenge: {0}")]
    InvalidChallenge(String),

    /// Invalid or incomplete configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Durable storage rejected an operation.
    #[error("Storage error: {0}")]
    Storage(String),
}
