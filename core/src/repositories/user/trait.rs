//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Every method receives the request's transaction handle and must run its
//! queries against it, so all store calls of one inbound operation share a
//! single unit of work.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Opaque transaction handle supplied by the boundary layer
    type Tx: Send;

    /// Persist a new user
    ///
    /// The store assigns the identifier and both timestamps.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with store-assigned fields
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, tx: &mut Self::Tx, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, tx: &mut Self::Tx, id: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    ///
    /// Email is globally unique, so at most one user matches.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(
        &self,
        tx: &mut Self::Tx,
        email: &str,
    ) -> Result<Option<User>, DomainError>;
}
