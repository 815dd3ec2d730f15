//! Mock implementation of ClientBankAccountRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pb_shared::generate_id;

use crate::domain::entities::client_bank_account::{ClientBankAccount, NewClientBankAccount};
use crate::errors::DomainError;

use super::trait_::ClientBankAccountRepository;

/// In-memory client bank account repository for testing
pub struct MockClientBankAccountRepository {
    accounts: Arc<RwLock<HashMap<String, ClientBankAccount>>>,
}

impl MockClientBankAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockClientBankAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientBankAccountRepository for MockClientBankAccountRepository {
    type Tx = ();

    async fn create(
        &self,
        _tx: &mut (),
        account: NewClientBankAccount,
    ) -> Result<ClientBankAccount, DomainError> {
        let now = Utc::now();
        let created = ClientBankAccount {
            id: generate_id(),
            client_id: account.client_id,
            bank_name: account.bank_name,
            branch_name: account.branch_name,
            account_number: account.account_number,
            account_name: account.account_name,
            created_at: now,
            updated_at: now,
        };
        self.accounts
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_by_id(
        &self,
        _tx: &mut (),
        id: &str,
    ) -> Result<Option<ClientBankAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }
}
