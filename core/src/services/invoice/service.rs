//! Main invoice service implementation

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pb_shared::BillingConfig;

use crate::context::RequestContext;
use crate::domain::entities::invoice::{Invoice, NewInvoice};
use crate::domain::value_objects::{InvoiceStatus, MonetaryCalculator};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{InvoiceRepository, UserRepository};

/// Fallback page size when the caller supplies no usable limit
const DEFAULT_LIST_LIMIT: i64 = 100;

/// Caller-supplied fields for invoice creation
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// Identifier of the billed client
    pub client_id: String,
    /// Date the invoice is issued
    pub issue_date: NaiveDate,
    /// Amount the client is paying, before fee and tax; must be positive
    pub payment_amount: Decimal,
    /// Date payment is due
    pub payment_due_date: NaiveDate,
}

/// Invoice service for issuing and listing invoices
pub struct InvoiceService<I, U>
where
    I: InvoiceRepository,
    U: UserRepository<Tx = I::Tx>,
{
    /// Invoice repository for persistence
    invoice_repository: Arc<I>,
    /// User repository for resolving the acting identity
    user_repository: Arc<U>,
    /// Process-wide fee and tax rates
    billing: BillingConfig,
}

impl<I, U> InvoiceService<I, U>
where
    I: InvoiceRepository,
    U: UserRepository<Tx = I::Tx>,
{
    /// Create a new invoice service
    ///
    /// # Arguments
    ///
    /// * `invoice_repository` - Repository for invoice persistence
    /// * `user_repository` - Repository for resolving the acting user
    /// * `billing` - Fee and tax rates applied at issue time
    pub fn new(invoice_repository: Arc<I>, user_repository: Arc<U>, billing: BillingConfig) -> Self {
        Self {
            invoice_repository,
            user_repository,
            billing,
        }
    }

    /// Issue a new invoice on behalf of the authenticated user
    ///
    /// Resolves the acting user from the context identity, computes fee, tax,
    /// and total with the configured rates, and persists the invoice with
    /// status `Unprocessed`. The issuing company is the acting user's
    /// company.
    ///
    /// # Returns
    ///
    /// * `Ok(Invoice)` - The fully hydrated invoice as persisted
    /// * `Err(DomainError)` - Validation failure, missing context value,
    ///   unresolvable identity, or a store failure surfaced unmodified
    pub async fn create_invoice(
        &self,
        ctx: &mut RequestContext<I::Tx>,
        input: CreateInvoiceInput,
    ) -> DomainResult<Invoice> {
        if input.payment_amount <= Decimal::ZERO {
            return Err(DomainError::validation("payment_amount must be positive"));
        }

        let user_id = ctx.identity()?.to_string();
        let tx = ctx.transaction()?;

        let user = self
            .user_repository
            .find_by_id(tx, &user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        let fee = MonetaryCalculator::compute_fee(input.payment_amount, self.billing.fee_rate);
        let tax = MonetaryCalculator::compute_tax(fee, self.billing.tax_rate);
        let invoice_amount =
            MonetaryCalculator::compute_invoice_amount(input.payment_amount, fee, tax);

        let invoice = NewInvoice {
            company_id: user.company_id,
            client_id: input.client_id,
            issue_date: input.issue_date,
            payment_amount: input.payment_amount,
            fee,
            fee_rate: self.billing.fee_rate,
            tax,
            tax_rate: self.billing.tax_rate,
            invoice_amount,
            payment_due_date: input.payment_due_date,
            status: InvoiceStatus::Unprocessed,
        };

        self.invoice_repository.create(tx, invoice).await
    }

    /// List invoices whose payment due date falls within a range
    ///
    /// A negative offset is clamped to zero and a non-positive limit falls
    /// back to the default of 100. Open bounds stay open: an absent start or
    /// end date means that side of the range is unbounded, never an error.
    /// Results come back ascending by due date; no match is an empty vec.
    pub async fn list_by_due_date_range(
        &self,
        ctx: &mut RequestContext<I::Tx>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        offset: i64,
        limit: i64,
    ) -> DomainResult<Vec<Invoice>> {
        let offset = offset.max(0);
        let limit = if limit <= 0 { DEFAULT_LIST_LIMIT } else { limit };

        let tx = ctx.transaction()?;
        self.invoice_repository
            .find_by_due_date_range(tx, start_date, end_date, offset, limit)
            .await
    }
}
