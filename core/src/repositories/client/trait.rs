//! Client repository trait defining the interface for client persistence.

use async_trait::async_trait;

use crate::domain::entities::client::{Client, NewClient};
use crate::errors::DomainError;

/// Repository trait for Client entity persistence operations
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Opaque transaction handle supplied by the boundary layer
    type Tx: Send;

    /// Persist a new client; the store assigns id and timestamps
    async fn create(&self, tx: &mut Self::Tx, client: NewClient) -> Result<Client, DomainError>;

    /// Find a client by its unique identifier
    async fn find_by_id(&self, tx: &mut Self::Tx, id: &str)
        -> Result<Option<Client>, DomainError>;
}
