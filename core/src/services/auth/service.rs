//! Main authentication service implementation

use std::sync::Arc;

use crate::context::RequestContext;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for credential verification and token issuance
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Token service for issuing access tokens
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for bearer token issuance
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Verify a credential pair and issue an access token
    ///
    /// An unknown email and a wrong password both fail with the same
    /// `InvalidCredentials` error so the caller cannot tell which part of
    /// the pair was wrong. Store failures other than "not found" propagate
    /// unmodified.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Request context carrying the transaction handle
    /// * `email` - Email address identifying the user
    /// * `password` - Plaintext password to verify against the stored hash
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A signed access token for the authenticated user
    /// * `Err(DomainError)` - Invalid credentials or a dependency failure
    pub async fn login(
        &self,
        ctx: &mut RequestContext<U::Tx>,
        email: &str,
        password: &str,
    ) -> DomainResult<String> {
        let tx = ctx.transaction()?;

        // Step 1: look up the user; an absent user must be indistinguishable
        // from a wrong password
        let user = match self.user_repository.find_by_email(tx, email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        // Step 2: verify the password against the stored bcrypt hash; any
        // verification failure collapses into the same generic error
        let password_matches = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 3: issue the access token
        self.token_service.generate_access_token(&user.id)
    }
}
