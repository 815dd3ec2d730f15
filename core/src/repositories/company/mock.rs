//! Mock implementation of CompanyRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pb_shared::generate_id;

use crate::domain::entities::company::{Company, NewCompany};
use crate::errors::DomainError;

use super::trait_::CompanyRepository;

/// In-memory company repository for testing
pub struct MockCompanyRepository {
    companies: Arc<RwLock<HashMap<String, Company>>>,
}

impl MockCompanyRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            companies: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepository {
    type Tx = ();

    async fn create(&self, _tx: &mut (), company: NewCompany) -> Result<Company, DomainError> {
        let now = Utc::now();
        let created = Company {
            id: generate_id(),
            corporate_name: company.corporate_name,
            representative_name: company.representative_name,
            phone_number: company.phone_number,
            postal_code: company.postal_code,
            address: company.address,
            created_at: now,
            updated_at: now,
        };
        self.companies
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, _tx: &mut (), id: &str) -> Result<Option<Company>, DomainError> {
        let companies = self.companies.read().await;
        Ok(companies.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find_round_trips() {
        let repo = MockCompanyRepository::new();
        let created = repo
            .create(
                &mut (),
                NewCompany {
                    corporate_name: "test corporation".to_string(),
                    representative_name: "test representative".to_string(),
                    phone_number: "000-0000-0000".to_string(),
                    postal_code: "000-0000".to_string(),
                    address: "test address".to_string(),
                },
            )
            .await
            .unwrap();

        let found = repo.find_by_id(&mut (), &created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_missing_company_returns_none() {
        let repo = MockCompanyRepository::new();
        assert_eq!(repo.find_by_id(&mut (), "missing").await.unwrap(), None);
    }
}
