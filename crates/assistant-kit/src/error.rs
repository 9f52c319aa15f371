//! Error types for assistant-kit operations.

use thiserror::Error;

/// Errors from the stores, the response models and email composition.
#[derive(Error, Debug)]
pub enum KitError {
    /// Reading or writing a store file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document or service response was not valid JSON for its shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Caller input failed validation (empty field, index out of range).
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The remote service answered with an error status.
    #[error("{service} error: {message}")]
    Service { service: String, message: String },

    /// A required setting (e.g., an API key) is absent.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

/// Convenience alias used throughout assistant-kit.
pub type Result<T> = std::result::Result<T, KitError>;
