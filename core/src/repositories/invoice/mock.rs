//! Mock implementation of InvoiceRepository for testing

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use pb_shared::generate_id;

use crate::domain::entities::invoice::{Invoice, NewInvoice};
use crate::errors::DomainError;

use super::trait_::InvoiceRepository;

/// In-memory invoice repository for testing
///
/// Keeps insertion order internally and sorts by due date on retrieval, the
/// same observable behavior the database implementation has. `poison` makes
/// every subsequent call fail with a dependency error.
pub struct MockInvoiceRepository {
    invoices: Arc<RwLock<Vec<Invoice>>>,
    poisoned: Arc<RwLock<Option<String>>>,
}

impl MockInvoiceRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(Vec::new())),
            poisoned: Arc::new(RwLock::new(None)),
        }
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

impl Default for MockInvoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceRepository for MockInvoiceRepository {
    type Tx = ();

    async fn create(&self, _tx: &mut (), invoice: NewInvoice) -> Result<Invoice, DomainError> {
        self.check_poisoned().await?;
        let now = Utc::now();
        let created = Invoice {
            id: generate_id(),
            company_id: invoice.company_id,
            client_id: invoice.client_id,
            issue_date: invoice.issue_date,
            payment_amount: invoice.payment_amount,
            fee: invoice.fee,
            fee_rate: invoice.fee_rate,
            tax: invoice.tax,
            tax_rate: invoice.tax_rate,
            invoice_amount: invoice.invoice_amount,
            payment_due_date: invoice.payment_due_date,
            status: invoice.status,
            created_at: now,
            updated_at: now,
        };
        self.invoices.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_due_date_range(
        &self,
        _tx: &mut (),
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, DomainError> {
        self.check_poisoned().await?;
        let invoices = self.invoices.read().await;

        let mut matched: Vec<Invoice> = invoices
            .iter()
            .filter(|inv| start_date.map_or(true, |start| inv.payment_due_date >= start))
            .filter(|inv| end_date.map_or(true, |end| inv.payment_due_date <= end))
            .cloned()
            .collect();
        matched.sort_by_key(|inv| inv.payment_due_date);

        Ok(matched
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}
