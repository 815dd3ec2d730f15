//! Authentication request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address identifying the user
    #[validate(email)]
    pub email: String,

    /// Plaintext password
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token for subsequent calls
    pub token: String,
}
