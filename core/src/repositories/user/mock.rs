//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pb_shared::generate_id;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository for testing
///
/// Uses `()` as the transaction handle. `poison` makes every subsequent call
/// fail with a dependency error, for exercising store-failure paths.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    poisoned: Arc<RwLock<Option<String>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            poisoned: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock repository pre-populated with one user
    pub async fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.write().await.insert(user.id.clone(), user);
        repo
    }

    /// Make every subsequent call fail with a dependency error
    pub async fn poison(&self, message: impl Into<String>) {
        *self.poisoned.write().await = Some(message.into());
    }

    async fn check_poisoned(&self) -> Result<(), DomainError> {
        match self.poisoned.read().await.as_ref() {
            Some(message) => Err(DomainError::dependency(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    type Tx = ();

    async fn create(&self, _tx: &mut (), user: NewUser) -> Result<User, DomainError> {
        self.check_poisoned().await?;
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: format!("email already registered: {}", user.email),
            });
        }

        let now = Utc::now();
        let created = User {
            id: generate_id(),
            company_id: user.company_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, _tx: &mut (), id: &str) -> Result<Option<User>, DomainError> {
        self.check_poisoned().await?;
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, _tx: &mut (), email: &str) -> Result<Option<User>, DomainError> {
        self.check_poisoned().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            company_id: "company-1".to_string(),
            name: "admin".to_string(),
            email: email.to_string(),
            password_hash: "$2b$12$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let repo = MockUserRepository::new();
        let created = repo.create(&mut (), new_user("a@example.com")).await.unwrap();

        assert!(!created.id.is_empty());
        assert!(created.created_at.timestamp() > 0);
        assert_eq!(
            repo.find_by_email(&mut (), "a@example.com").await.unwrap(),
            Some(created)
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let repo = MockUserRepository::new();
        repo.create(&mut (), new_user("a@example.com")).await.unwrap();

        let err = repo.create(&mut (), new_user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_poisoned_repository_fails() {
        let repo = MockUserRepository::new();
        repo.poison("connection reset").await;

        let err = repo.find_by_id(&mut (), "any").await.unwrap_err();
        assert!(matches!(err, DomainError::Dependency { .. }));
    }
}
