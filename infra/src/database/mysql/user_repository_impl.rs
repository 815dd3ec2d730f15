//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::Utc;

use pb_core::domain::entities::{NewUser, User};
use pb_core::repositories::UserRepository;
use pb_core::DomainError;
use pb_shared::generate_id;

use super::map_sqlx_error;
use super::rows::UserRow;
use crate::database::MySqlTx;

/// MySQL implementation of UserRepository
///
/// Stateless: every query runs against the transaction handle passed in by
/// the request context.
pub struct MySqlUserRepository;

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySqlUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    type Tx = MySqlTx;

    async fn create(&self, tx: &mut MySqlTx, user: NewUser) -> Result<User, DomainError> {
        let id = generate_id();
        let now = Utc::now();

        let query = r#"
            INSERT INTO users (id, company_id, name, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&user.company_id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(User {
            id,
            company_id: user.company_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, tx: &mut MySqlTx, id: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, company_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, UserRow>(query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(
        &self,
        tx: &mut MySqlTx,
        email: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, company_id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, UserRow>(query)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(User::from))
    }
}
