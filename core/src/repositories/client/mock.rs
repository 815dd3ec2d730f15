//! Mock implementation of ClientRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pb_shared::generate_id;

use crate::domain::entities::client::{Client, NewClient};
use crate::errors::DomainError;

use super::trait_::ClientRepository;

/// In-memory client repository for testing
pub struct MockClientRepository {
    clients: Arc<RwLock<HashMap<String, Client>>>,
}

impl MockClientRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    type Tx = ();

    async fn create(&self, _tx: &mut (), client: NewClient) -> Result<Client, DomainError> {
        let now = Utc::now();
        let created = Client {
            id: generate_id(),
            company_id: client.company_id,
            corporate_name: client.corporate_name,
            representative_name: client.representative_name,
            phone_number: client.phone_number,
            postal_code: client.postal_code,
            address: client.address,
            created_at: now,
            updated_at: now,
        };
        self.clients
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, _tx: &mut (), id: &str) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().await;
        Ok(clients.get(id).cloned())
    }
}
