//! Invoice repository trait defining the interface for invoice persistence.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::invoice::{Invoice, NewInvoice};
use crate::errors::DomainError;

/// Repository trait for Invoice entity persistence operations
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Opaque transaction handle supplied by the boundary layer
    type Tx: Send;

    /// Persist a new invoice
    ///
    /// The store assigns the identifier and both timestamps and returns the
    /// fully hydrated invoice.
    ///
    /// # Returns
    /// * `Ok(Invoice)` - The created invoice with store-assigned fields
    /// * `Err(DomainError)` - Creation failed (constraint violation, store
    ///   failure)
    async fn create(&self, tx: &mut Self::Tx, invoice: NewInvoice)
        -> Result<Invoice, DomainError>;

    /// List invoices whose payment due date falls within a range
    ///
    /// The range is inclusive on both ends; a `None` bound is unbounded.
    /// Results are ordered ascending by payment due date, with `offset` and
    /// `limit` applied after ordering. An empty match is an empty vec, not an
    /// error.
    ///
    /// # Arguments
    /// * `start_date` - Inclusive lower bound, or `None` for no lower bound
    /// * `end_date` - Inclusive upper bound, or `None` for no upper bound
    /// * `offset` - Number of ordered rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn find_by_due_date_range(
        &self,
        tx: &mut Self::Tx,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, DomainError>;
}
