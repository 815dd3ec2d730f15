//! Invoice request and response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use pb_core::domain::entities::Invoice;
use pb_core::domain::value_objects::InvoiceStatus;

/// Invoice creation request body
///
/// Dates arrive as `YYYY-MM-DD` strings and are parsed by the handler; the
/// payment amount arrives as a numeric string to preserve precision.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    /// Identifier of the billed client
    #[validate(length(min = 1))]
    pub client_id: String,

    /// Issue date, `YYYY-MM-DD`
    #[validate(length(min = 1))]
    pub issue_date: String,

    /// Payment amount before fee and tax
    pub payment_amount: Decimal,

    /// Payment due date, `YYYY-MM-DD`
    #[validate(length(min = 1))]
    pub payment_due_date: String,
}

/// Query parameters for the invoice listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    /// Inclusive lower due-date bound, `YYYY-MM-DD`
    pub start_date: Option<String>,

    /// Inclusive upper due-date bound, `YYYY-MM-DD`
    pub end_date: Option<String>,

    /// Number of ordered rows to skip
    pub offset: Option<i64>,

    /// Maximum number of rows to return
    pub limit: Option<i64>,
}

/// Invoice representation returned to clients
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
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
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_amount_deserializes_from_numeric_string() {
        let json = r#"{
            "client_id": "client-1",
            "issue_date": "2025-01-01",
            "payment_amount": "100000",
            "payment_due_date": "2025-02-01"
        }"#;

        let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payment_amount, Decimal::from(100_000));
    }

    #[test]
    fn test_response_serializes_dates_and_decimals_as_strings() {
        let response = InvoiceResponse {
            id: "invoice-1".to_string(),
            client_id: "client-1".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            payment_amount: Decimal::from(100_000),
            fee: Decimal::from(4_000),
            fee_rate: Decimal::new(400, 4),
            tax: Decimal::from(400),
            tax_rate: Decimal::new(1000, 4),
            invoice_amount: Decimal::from(104_400),
            payment_due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: InvoiceStatus::Unprocessed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["issue_date"], "2025-01-01");
        assert_eq!(json["payment_amount"], "100000");
        assert_eq!(json["fee_rate"], "0.0400");
        assert_eq!(json["status"], "未処理");
    }
}
