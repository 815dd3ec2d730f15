//! Mapping from domain errors to HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use pb_core::errors::{DomainError, TokenError};
use pb_shared::ErrorResponse;

/// Wrapper that carries a [`DomainError`] across the actix boundary
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    /// Stable error code for programmatic handling by clients
    fn error_code(&self) -> &'static str {
        match &self.0 {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Conflict { .. } => "CONFLICT",
            DomainError::MissingContext { .. } => "MISSING_CONTEXT",
            DomainError::Dependency { .. } => "DEPENDENCY_FAILURE",
            DomainError::Auth(_) => "AUTHENTICATION_FAILED",
            DomainError::Token(TokenError::TokenGenerationFailed) => "DEPENDENCY_FAILURE",
            DomainError::Token(_) => "INVALID_TOKEN",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            // Failing to sign a token is a dependency failure, not a
            // credential problem
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Auth(_) | DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::MissingContext { .. } | DomainError::Dependency { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("API error: {:?}", self.0);
        }

        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.error_code(), self.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_core::errors::{AuthError, TokenError};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError(DomainError::validation("bad input")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError(AuthError::InvalidCredentials.into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError(TokenError::TokenExpired.into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError(TokenError::TokenGenerationFailed.into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError(DomainError::not_found("user")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError(DomainError::Conflict {
                    message: "duplicate".to_string(),
                }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError(DomainError::MissingContext { key: "identity" }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError(DomainError::dependency("down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
        }
    }

    #[test]
    fn test_credential_failure_message_stays_generic() {
        let error = ApiError(AuthError::InvalidCredentials.into());
        assert_eq!(error.0.to_string(), "Invalid email or password");
        assert_eq!(error.error_code(), "AUTHENTICATION_FAILED");
    }
}
