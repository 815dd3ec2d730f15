//! Authentication and token error definitions
//!
//! These errors represent the failure modes of credential verification and
//! bearer token handling. Messages are deliberately generic so the caller
//! cannot tell which part of a credential pair was wrong.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email and wrong password are indistinguishable on purpose
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
