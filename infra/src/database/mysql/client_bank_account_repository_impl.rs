//! MySQL implementation of the ClientBankAccountRepository trait.

use async_trait::async_trait;
use chrono::Utc;

use pb_core::domain::entities::{ClientBankAccount, NewClientBankAccount};
use pb_core::repositories::ClientBankAccountRepository;
use pb_core::DomainError;
use pb_shared::generate_id;

use super::map_sqlx_error;
use super::rows::ClientBankAccountRow;
use crate::database::MySqlTx;

/// MySQL implementation of ClientBankAccountRepository
pub struct MySqlClientBankAccountRepository;

impl MySqlClientBankAccountRepository {
    /// Create a new MySQL client bank account repository
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySqlClientBankAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientBankAccountRepository for MySqlClientBankAccountRepository {
    type Tx = MySqlTx;

    async fn create(
        &self,
        tx: &mut MySqlTx,
        account: NewClientBankAccount,
    ) -> Result<ClientBankAccount, DomainError> {
        let id = generate_id();
        let now = Utc::now();

        let query = r#"
            INSERT INTO client_bank_accounts
                (id, client_id, bank_name, branch_name, account_number, account_name,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&account.client_id)
            .bind(&account.bank_name)
            .bind(&account.branch_name)
            .bind(&account.account_number)
            .bind(&account.account_name)
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(ClientBankAccount {
            id,
            client_id: account.client_id,
            bank_name: account.bank_name,
            branch_name: account.branch_name,
            account_number: account.account_number,
            account_name: account.account_name,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(
        &self,
        tx: &mut MySqlTx,
        id: &str,
    ) -> Result<Option<ClientBankAccount>, DomainError> {
        let query = r#"
            SELECT id, client_id, bank_name, branch_name, account_number, account_name,
                   created_at, updated_at
            FROM client_bank_accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, ClientBankAccountRow>(query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(ClientBankAccount::from))
    }
}
