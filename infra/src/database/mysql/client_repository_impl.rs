//! MySQL implementation of the ClientRepository trait.

use async_trait::async_trait;
use chrono::Utc;

use pb_core::domain::entities::{Client, NewClient};
use pb_core::repositories::ClientRepository;
use pb_core::DomainError;
use pb_shared::generate_id;

use super::map_sqlx_error;
use super::rows::ClientRow;
use crate::database::MySqlTx;

/// MySQL implementation of ClientRepository
pub struct MySqlClientRepository;

impl MySqlClientRepository {
    /// Create a new MySQL client repository
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySqlClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for MySqlClientRepository {
    type Tx = MySqlTx;

    async fn create(&self, tx: &mut MySqlTx, client: NewClient) -> Result<Client, DomainError> {
        let id = generate_id();
        let now = Utc::now();

        let query = r#"
            INSERT INTO clients
                (id, company_id, corporate_name, representative_name, phone_number, postal_code,
                 address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&client.company_id)
            .bind(&client.corporate_name)
            .bind(&client.representative_name)
            .bind(&client.phone_number)
            .bind(&client.postal_code)
            .bind(&client.address)
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Client {
            id,
            company_id: client.company_id,
            corporate_name: client.corporate_name,
            representative_name: client.representative_name,
            phone_number: client.phone_number,
            postal_code: client.postal_code,
            address: client.address,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, tx: &mut MySqlTx, id: &str) -> Result<Option<Client>, DomainError> {
        let query = r#"
            SELECT id, company_id, corporate_name, representative_name, phone_number, postal_code,
                   address, created_at, updated_at
            FROM clients
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, ClientRow>(query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Client::from))
    }
}
