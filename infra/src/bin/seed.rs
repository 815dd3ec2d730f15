//! One-shot seeding tool.
//!
//! Provisions a demo company, an admin user, a client with a bank account,
//! and one processed invoice inside a single transaction. Intended for local
//! development; run once against an empty database.

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use pb_core::domain::entities::{
    NewClient, NewClientBankAccount, NewCompany, NewInvoice, NewUser,
};
use pb_core::domain::value_objects::InvoiceStatus;
use pb_core::repositories::{
    ClientBankAccountRepository, ClientRepository, CompanyRepository, InvoiceRepository,
    UserRepository,
};
use pb_infra::{
    connect_pool, MySqlClientBankAccountRepository, MySqlClientRepository,
    MySqlCompanyRepository, MySqlInvoiceRepository, MySqlUserRepository,
};
use pb_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let pool = connect_pool(&config.database)
        .await
        .context("failed to connect to database")?;

    let company_repository = MySqlCompanyRepository::new();
    let user_repository = MySqlUserRepository::new();
    let client_repository = MySqlClientRepository::new();
    let client_bank_account_repository = MySqlClientBankAccountRepository::new();
    let invoice_repository = MySqlInvoiceRepository::new();

    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let company = company_repository
        .create(
            &mut tx,
            NewCompany {
                corporate_name: "test corporation".to_string(),
                representative_name: "test representative".to_string(),
                phone_number: "000-0000-0000".to_string(),
                postal_code: "000-0000".to_string(),
                address: "test address".to_string(),
            },
        )
        .await?;

    let password_hash =
        bcrypt::hash("password", bcrypt::DEFAULT_COST).context("failed to hash password")?;
    let user = user_repository
        .create(
            &mut tx,
            NewUser {
                company_id: company.id.clone(),
                name: "admin".to_string(),
                email: "admin@localhost.ai".to_string(),
                password_hash,
            },
        )
        .await?;

    let client = client_repository
        .create(
            &mut tx,
            NewClient {
                company_id: company.id.clone(),
                corporate_name: "test corporation".to_string(),
                representative_name: "test representative".to_string(),
                phone_number: "000-0000-0000".to_string(),
                postal_code: "000-0000".to_string(),
                address: "test address".to_string(),
            },
        )
        .await?;

    client_bank_account_repository
        .create(
            &mut tx,
            NewClientBankAccount {
                client_id: client.id.clone(),
                bank_name: "test bank".to_string(),
                branch_name: "test branch".to_string(),
                account_number: "0000000000000".to_string(),
                account_name: "test account".to_string(),
            },
        )
        .await?;

    // Display data for an already-processed invoice; the values are fixed,
    // not recomputed through the calculator.
    invoice_repository
        .create(
            &mut tx,
            NewInvoice {
                company_id: company.id.clone(),
                client_id: client.id.clone(),
                issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                payment_amount: Decimal::from(10_000),
                fee: Decimal::from(1_000),
                fee_rate: Decimal::new(100, 4),
                tax: Decimal::from(1_000),
                tax_rate: Decimal::new(100, 4),
                invoice_amount: Decimal::from(10_000),
                payment_due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                status: InvoiceStatus::Processed,
            },
        )
        .await?;

    tx.commit().await.context("failed to commit seed data")?;

    tracing::info!(
        company_id = %company.id,
        user_email = %user.email,
        "seed data created"
    );
    Ok(())
}
