//! Database row types and their domain conversions.
//!
//! This module is the single mapping boundary between domain entities and
//! storage rows: one row struct and one conversion per entity. Monetary
//! columns are DECIMAL(20,2), rate columns DECIMAL(5,4), date columns DATE,
//! and the invoice status column stores the status label.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use pb_core::domain::entities::{Client, ClientBankAccount, Company, Invoice, User};
use pb_core::domain::value_objects::InvoiceStatus;
use pb_core::DomainError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CompanyRow {
    pub id: String,
    pub corporate_name: String,
    pub representative_name: String,
    pub phone_number: String,
    pub postal_code: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            corporate_name: row.corporate_name,
            representative_name: row.representative_name,
            phone_number: row.phone_number,
            postal_code: row.postal_code,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            company_id: row.company_id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClientRow {
    pub id: String,
    pub company_id: String,
    pub corporate_name: String,
    pub representative_name: String,
    pub phone_number: String,
    pub postal_code: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            company_id: row.company_id,
            corporate_name: row.corporate_name,
            representative_name: row.representative_name,
            phone_number: row.phone_number,
            postal_code: row.postal_code,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClientBankAccountRow {
    pub id: String,
    pub client_id: String,
    pub bank_name: String,
    pub branch_name: String,
    pub account_number: String,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientBankAccountRow> for ClientBankAccount {
    fn from(row: ClientBankAccountRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            bank_name: row.bank_name,
            branch_name: row.branch_name,
            account_number: row.account_number,
            account_name: row.account_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct InvoiceRow {
    pub id: String,
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = DomainError;

    /// Fails only on an unknown status label, which indicates corrupt data
    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let status: InvoiceStatus = row.status.parse()?;
        Ok(Self {
            id: row.id,
            company_id: row.company_id,
            client_id: row.client_id,
            issue_date: row.issue_date,
            payment_amount: row.payment_amount,
            fee: row.fee,
            fee_rate: row.fee_rate,
            tax: row.tax,
            tax_rate: row.tax_rate,
            invoice_amount: row.invoice_amount,
            payment_due_date: row.payment_due_date,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
