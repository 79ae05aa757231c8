// Error types for the client core

use backoffice_client::ClientError;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by caches, screens, and the session store
#[derive(Debug, Error)]
pub enum CoreError {
    /// Transport failure or non-2xx response from the backend
    #[error("API error: {0}")]
    Api(#[from] ClientError),

    /// Client-side validation failure (required field, date ordering,
    /// file size)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session marker store failure
    #[error("Session error: {0}")]
    Session(String),
}

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Create a session store error
    pub fn session(msg: impl Into<String>) -> Self {
        CoreError::Session(msg.into())
    }

    /// True for errors raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
