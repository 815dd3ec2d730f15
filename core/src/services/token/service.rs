//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Claims embedded in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: String,
    /// Issued-at time (seconds since the Unix epoch)
    pub iat: i64,
    /// Expiry time (seconds since the Unix epoch)
    pub exp: i64,
}

/// Service for issuing and verifying signed bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed access token for a user
    ///
    /// The token embeds the user identifier, the issue time, and an expiry
    /// one token lifetime later.
    ///
    /// # Returns
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Signing failed
    pub fn generate_access_token(&self, user_id: &str) -> Result<String, DomainError> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.token_expiry)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims if the signature and expiry check
    ///   out
    /// * `Err(DomainError)` - Token expired, signature invalid, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_secret(secret: &str) -> TokenService {
        TokenService::new(TokenServiceConfig::new(secret, 3600))
    }

    #[test]
    fn test_generated_token_round_trips() {
        let service = service_with_secret("test-secret");
        let token = service.generate_access_token("user-1").unwrap();
        assert!(!token.is_empty());

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service_with_secret("test-secret");

        // Craft a token whose expiry is well in the past
        let now = Utc::now();
        let claims = Claims {
            user_id: "user-1".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = service.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let issuer = service_with_secret("secret-a");
        let verifier = service_with_secret("secret-b");

        let token = issuer.generate_access_token("user-1").unwrap();
        let err = verifier.verify_access_token(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = service_with_secret("test-secret");
        let err = service.verify_access_token("not-a-token").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidTokenFormat)
        ));
    }
}
