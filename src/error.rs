//! Error types for Letterbox.

use thiserror::Error;

/// Common error type for Letterbox.
#[derive(Error, Debug)]
pub enum LetterboxError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for client input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Mail transport error (per-letter send failure).
    #[error("mail transport error: {0}")]
    Transport(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for LetterboxError {
    fn from(e: sqlx::Error) -> Self {
        LetterboxError::Database(e.to_string())
    }
}

/// Result type alias for Letterbox operations.
pub type Result<T> = std::result::Result<T, LetterboxError>;
