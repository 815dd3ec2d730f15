//! Token service configuration

use pb_shared::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign and verify tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub token_expiry: i64,
}

impl TokenServiceConfig {
    /// Create a new configuration
    pub fn new(jwt_secret: impl Into<String>, token_expiry: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_expiry,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_expiry: config.token_expiry,
        }
    }
}
