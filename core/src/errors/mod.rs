//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Every operation in the core returns these as typed values; the boundary
/// layer maps them to transport status codes. The core never recovers from
/// them beyond distinguishing "not found" from other store failures during
/// login.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Missing request context value: {key}")]
    MissingContext { key: &'static str },

    #[error("Dependency failure: {message}")]
    Dependency { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a missing referenced entity
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a store or signing failure
    pub fn dependency(message: impl Into<String>) -> Self {
        Self::Dependency {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_bridges_transparently() {
        let error: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_missing_context_names_the_key() {
        let error = DomainError::MissingContext { key: "identity" };
        assert!(error.to_string().contains("identity"));
    }
}
