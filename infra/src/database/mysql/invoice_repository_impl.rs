//! MySQL implementation of the InvoiceRepository trait.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use pb_core::domain::entities::{Invoice, NewInvoice};
use pb_core::repositories::InvoiceRepository;
use pb_core::DomainError;
use pb_shared::generate_id;

use super::map_sqlx_error;
use super::rows::InvoiceRow;
use crate::database::MySqlTx;

/// MySQL implementation of InvoiceRepository
pub struct MySqlInvoiceRepository;

impl MySqlInvoiceRepository {
    /// Create a new MySQL invoice repository
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySqlInvoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceRepository for MySqlInvoiceRepository {
    type Tx = MySqlTx;

    async fn create(&self, tx: &mut MySqlTx, invoice: NewInvoice) -> Result<Invoice, DomainError> {
        let id = generate_id();
        let now = Utc::now();

        let query = r#"
            INSERT INTO invoices
                (id, company_id, client_id, issue_date, payment_amount, fee, fee_rate,
                 tax, tax_rate, invoice_amount, payment_due_date, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&invoice.company_id)
            .bind(&invoice.client_id)
            .bind(invoice.issue_date)
            .bind(invoice.payment_amount)
            .bind(invoice.fee)
            .bind(invoice.fee_rate)
            .bind(invoice.tax)
            .bind(invoice.tax_rate)
            .bind(invoice.invoice_amount)
            .bind(invoice.payment_due_date)
            .bind(invoice.status.as_str())
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Invoice {
            id,
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
        })
    }

    async fn find_by_due_date_range(
        &self,
        tx: &mut MySqlTx,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, DomainError> {
        // The WHERE clause only carries the bounds the caller supplied; an
        // absent bound leaves that side of the range open.
        let mut query = String::from(
            r#"
            SELECT id, company_id, client_id, issue_date, payment_amount, fee, fee_rate,
                   tax, tax_rate, invoice_amount, payment_due_date, status, created_at, updated_at
            FROM invoices
            WHERE 1 = 1
        "#,
        );
        if start_date.is_some() {
            query.push_str(" AND payment_due_date >= ?");
        }
        if end_date.is_some() {
            query.push_str(" AND payment_due_date <= ?");
        }
        query.push_str(" ORDER BY payment_due_date ASC LIMIT ? OFFSET ?");

        let mut q = sqlx::query_as::<_, InvoiceRow>(&query);
        if let Some(start) = start_date {
            q = q.bind(start);
        }
        if let Some(end) = end_date {
            q = q.bind(end);
        }

        let rows = q
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(Invoice::try_from).collect()
    }
}
