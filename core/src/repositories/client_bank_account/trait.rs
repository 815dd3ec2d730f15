//! Client bank account repository trait.

use async_trait::async_trait;

use crate::domain::entities::client_bank_account::{ClientBankAccount, NewClientBankAccount};
use crate::errors::DomainError;

/// Repository trait for ClientBankAccount entity persistence operations
#[async_trait]
pub trait ClientBankAccountRepository: Send + Sync {
    /// Opaque transaction handle supplied by the boundary layer
    type Tx: Send;

    /// Persist a new bank account; the store assigns id and timestamps
    async fn create(
        &self,
        tx: &mut Self::Tx,
        account: NewClientBankAccount,
    ) -> Result<ClientBankAccount, DomainError>;

    /// Find a bank account by its unique identifier
    async fn find_by_id(
        &self,
        tx: &mut Self::Tx,
        id: &str,
    ) -> Result<Option<ClientBankAccount>, DomainError>;
}
