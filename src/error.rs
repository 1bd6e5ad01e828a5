//! Error types for StenoScore

use thiserror::Error;

/// Result type for StenoScore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in scoring or loading inputs
#[derive(Error, Debug)]
pub enum Error {
    /// Caller broke a precondition (zero duration, empty reference, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Result records could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Is this a caller contract violation?
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
