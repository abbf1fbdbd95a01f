//! # Registry Errors
//!
//! Shared error taxonomy for the domain registries.
//! Every failure maps to a fixed HTTP status at the request boundary.

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by the domain registries
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Bad or missing input
    #[error("{0}")]
    Validation(String),

    /// Unknown identifier
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unique-key violation
    #[error("{0}")]
    Conflict(String),

    /// Persistence failure (details stay server-side)
    #[error("Server error")]
    Store(String),
}

impl RegistryError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RegistryError::Validation(_) => 400,
            RegistryError::NotFound(_) => 404,
            RegistryError::Conflict(_) => 409,
            RegistryError::Store(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
