//! Company repository trait defining the interface for company persistence.

use async_trait::async_trait;

use crate::domain::entities::company::{Company, NewCompany};
use crate::errors::DomainError;

/// Repository trait for Company entity persistence operations
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Opaque transaction handle supplied by the boundary layer
    type Tx: Send;

    /// Persist a new company; the store assigns id and timestamps
    async fn create(&self, tx: &mut Self::Tx, company: NewCompany)
        -> Result<Company, DomainError>;

    /// Find a company by its unique identifier
    async fn find_by_id(
        &self,
        tx: &mut Self::Tx,
        id: &str,
    ) -> Result<Option<Company>, DomainError>;
}
