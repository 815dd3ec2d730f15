//! Invoice endpoints.

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use validator::Validate;

use pb_core::services::CreateInvoiceInput;
use pb_core::{DomainError, RequestContext};

use crate::app::AppState;
use crate::dto::{CreateInvoiceRequest, InvoiceResponse, ListInvoicesQuery};
use crate::error::ApiError;
use crate::middleware::AuthContext;

use super::finish_transaction;

/// `POST /api/invoices` - issue a new invoice for the authenticated user
pub async fn create_invoice(
    state: web::Data<AppState>,
    auth: AuthContext,
    payload: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError(DomainError::validation(e.to_string())))?;

    let issue_date = parse_date(&payload.issue_date, "issue_date")?;
    let payment_due_date = parse_date(&payload.payment_due_date, "payment_due_date")?;

    let tx = state
        .pool
        .begin()
        .await
        .map_err(|e| ApiError(DomainError::dependency(e.to_string())))?;
    let mut ctx = RequestContext::new()
        .with_transaction(tx)
        .with_identity(auth.user_id.clone());

    let input = CreateInvoiceInput {
        client_id: payload.client_id.clone(),
        issue_date,
        payment_amount: payload.payment_amount,
        payment_due_date,
    };
    let result = state.invoice_service.create_invoice(&mut ctx, input).await;
    let invoice = finish_transaction(ctx, result).await?;

    Ok(HttpResponse::Created().json(InvoiceResponse::from(invoice)))
}

/// `GET /api/invoices` - list invoices by payment due date range
pub async fn get_invoices(
    state: web::Data<AppState>,
    _auth: AuthContext,
    query: web::Query<ListInvoicesQuery>,
) -> Result<HttpResponse, ApiError> {
    let start_date = parse_optional_date(query.start_date.as_deref(), "start_date")?;
    let end_date = parse_optional_date(query.end_date.as_deref(), "end_date")?;

    let tx = state
        .pool
        .begin()
        .await
        .map_err(|e| ApiError(DomainError::dependency(e.to_string())))?;
    let mut ctx = RequestContext::new().with_transaction(tx);

    let result = state
        .invoice_service
        .list_by_due_date_range(
            &mut ctx,
            start_date,
            end_date,
            query.offset.unwrap_or(0),
            query.limit.unwrap_or(0),
        )
        .await;
    let invoices = finish_transaction(ctx, result).await?;

    let responses: Vec<InvoiceResponse> =
        invoices.into_iter().map(InvoiceResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ApiError(DomainError::validation(format!(
            "Invalid {field} format. Use YYYY-MM-DD"
        )))
    })
}

fn parse_optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw, field).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_calendar_dates() {
        let date = parse_date("2025-02-01", "issue_date").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("01/02/2025", "issue_date").is_err());
        assert!(parse_date("2025-2-1x", "issue_date").is_err());
    }

    #[test]
    fn test_parse_optional_date_treats_empty_as_absent() {
        assert_eq!(parse_optional_date(None, "start_date").unwrap(), None);
        assert_eq!(parse_optional_date(Some(""), "start_date").unwrap(), None);
        assert!(parse_optional_date(Some("2025-01-01"), "start_date")
            .unwrap()
            .is_some());
    }
}
