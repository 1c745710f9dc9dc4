// Rust guideline compliant 2026-02-09

//! Error handling for Dohas application services.

use dohas_core::{Error as CoreError, Language};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and notification output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The remote content API could not be reached or answered with an error.
    RemoteError,
    /// The remote content API returned no challenges.
    EmptyResponse,
    /// Fetched content could not be written to durable storage.
    PersistError,
    /// Input validation failed.
    ValidationError,
    /// Configuration is missing or invalid.
    ConfigError,
    /// IO failure while reading or writing local data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Durable storage rejected an operation.
    StorageError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or HTTP failure while fetching one language.
    #[error("Failed to fetch {} challenges: {message}", .language.display_name())]
    Remote {
        /// Language being fetched.
        language: Language,
        /// Transport or status description.
        message: String,
    },

    /// The remote answered with a null, missing or empty result.
    #[error("Failed to fetch {} challenges: Empty or invalid response", .language.display_name())]
    EmptyResponse {
        /// Language being fetched.
        language: Language,
    },

    /// Writing fetched content to durable storage failed.
    #[error("Failed to save challenges data to local storage")]
    Persist {
        /// Underlying storage failure.
        #[source]
        source: CoreError,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Remote { .. } => ErrorCode::RemoteError,
            AppError::EmptyResponse { .. } => ErrorCode::EmptyResponse,
            AppError::Persist { .. } => ErrorCode::PersistError,
            AppError::Core(core) => match core {
                CoreError::InvalidChallenge(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Storage(_) => ErrorCode::StorageError,
            },
        }
    }

    /// Returns the language a remote refresh failed for, if any.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        match self {
            AppError::Remote { language, .. } | AppError::EmptyResponse { language } => {
                Some(*language)
            }
            AppError::Persist { .. } | AppError::Core(_) => None,
        }
    }
}
