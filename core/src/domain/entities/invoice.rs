//! Invoice entity: a billing invoice issued by a company to a client.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::InvoiceStatus;

/// A persisted invoice
///
/// All monetary fields are exact decimals. The fee and tax recorded here are
/// the truncated products computed at issue time together with the rates in
/// force, so a later rate change never alters an issued invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier, assigned by the store at creation time
    pub id: String,

    /// Identifier of the issuing company
    pub company_id: String,

    /// Identifier of the billed client
    pub client_id: String,

    /// Date the invoice was issued
    pub issue_date: NaiveDate,

    /// Amount the client is paying, before fee and tax
    pub payment_amount: Decimal,

    /// Fee charged on the payment amount, truncated to whole currency units
    pub fee: Decimal,

    /// Fee rate in force at issue time (four fractional digits)
    pub fee_rate: Decimal,

    /// Consumption tax charged on the fee, truncated to whole currency units
    pub tax: Decimal,

    /// Tax rate in force at issue time (four fractional digits)
    pub tax_rate: Decimal,

    /// Total billed amount: payment amount + fee + tax
    pub invoice_amount: Decimal,

    /// Date payment is due
    pub payment_due_date: NaiveDate,

    /// Processing status of the invoice
    pub status: InvoiceStatus,

    /// Timestamp when the invoice was created (store-assigned)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the invoice was last updated (store-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for an [`Invoice`]
///
/// Carries the computed monetary fields alongside the caller-supplied ones;
/// identifier and timestamps are assigned by the store when the invoice is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub company_id: String,
    pub client_id: String,
    pub issue_date: NaiveDate,
    pub payment_amount: Decimal,
    pub fee: Decimal,
    pub fee_rate: Decimal,
    pub tax: Decimal,
    pub tax_rate: Decimal,
    pub invoice_amount: Decimal,
    pub payment_due_date: NaiveDate,
    pub status: InvoiceStatus,
}
