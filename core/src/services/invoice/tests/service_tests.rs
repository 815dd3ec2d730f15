//! Invoice service behavior tests

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pb_shared::BillingConfig;

use crate::context::RequestContext;
use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::InvoiceStatus;
use crate::errors::DomainError;
use crate::repositories::{MockInvoiceRepository, MockUserRepository, UserRepository};
use crate::services::invoice::{CreateInvoiceInput, InvoiceService};

struct Fixture {
    service: InvoiceService<MockInvoiceRepository, MockUserRepository>,
    invoice_repository: Arc<MockInvoiceRepository>,
    user_id: String,
}

async fn fixture() -> Fixture {
    let invoice_repository = Arc::new(MockInvoiceRepository::new());
    let user_repository = Arc::new(MockUserRepository::new());

    let user = user_repository
        .create(
            &mut (),
            NewUser {
                company_id: "company-1".to_string(),
                name: "admin".to_string(),
                email: "admin@localhost.ai".to_string(),
                password_hash: "$2b$12$hash".to_string(),
            },
        )
        .await
        .unwrap();

    Fixture {
        service: InvoiceService::new(
            invoice_repository.clone(),
            user_repository,
            BillingConfig::default(),
        ),
        invoice_repository,
        user_id: user.id,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn input(payment_amount: i64) -> CreateInvoiceInput {
    CreateInvoiceInput {
        client_id: "client-1".to_string(),
        issue_date: date(2025, 1, 1),
        payment_amount: Decimal::from(payment_amount),
        payment_due_date: date(2025, 2, 1),
    }
}

fn ctx(user_id: &str) -> RequestContext<()> {
    RequestContext::new()
        .with_transaction(())
        .with_identity(user_id)
}

#[tokio::test]
async fn test_create_invoice_computes_fee_tax_and_total() {
    let f = fixture().await;
    let mut ctx = ctx(&f.user_id);

    let invoice = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap();

    assert_eq!(invoice.payment_amount, Decimal::from(100_000));
    assert_eq!(invoice.fee, Decimal::from(4_000));
    assert_eq!(invoice.fee_rate, Decimal::new(400, 4));
    assert_eq!(invoice.tax, Decimal::from(400));
    assert_eq!(invoice.tax_rate, Decimal::new(1000, 4));
    assert_eq!(invoice.invoice_amount, Decimal::from(104_400));
    assert_eq!(invoice.status, InvoiceStatus::Unprocessed);
    assert_eq!(invoice.company_id, "company-1");
    assert_eq!(invoice.client_id, "client-1");
}

#[tokio::test]
async fn test_create_invoice_with_another_amount() {
    let f = fixture().await;
    let mut ctx = ctx(&f.user_id);

    let invoice = f.service.create_invoice(&mut ctx, input(250_000)).await.unwrap();

    assert_eq!(invoice.fee, Decimal::from(10_000));
    assert_eq!(invoice.tax, Decimal::from(1_000));
    assert_eq!(invoice.invoice_amount, Decimal::from(261_000));
}

#[tokio::test]
async fn test_created_invoice_has_store_assigned_fields() {
    let f = fixture().await;
    let mut ctx = ctx(&f.user_id);

    let invoice = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap();

    assert!(!invoice.id.is_empty());
    assert!(invoice.created_at.timestamp() > 0);
    assert!(invoice.updated_at.timestamp() > 0);
}

#[tokio::test]
async fn test_non_positive_payment_amount_is_rejected() {
    let f = fixture().await;
    let mut ctx = ctx(&f.user_id);

    let mut bad = input(100_000);
    bad.payment_amount = Decimal::ZERO;
    let err = f.service.create_invoice(&mut ctx, bad).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let mut negative = input(100_000);
    negative.payment_amount = Decimal::from(-1);
    let err = f.service.create_invoice(&mut ctx, negative).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_create_invoice_without_identity_fails_with_missing_context() {
    let f = fixture().await;
    let mut ctx = RequestContext::new().with_transaction(());

    let err = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap_err();
    assert!(matches!(err, DomainError::MissingContext { key: "identity" }));
}

#[tokio::test]
async fn test_create_invoice_without_transaction_fails_with_missing_context() {
    let f = fixture().await;
    let mut ctx = RequestContext::new().with_identity(&f.user_id);

    let err = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::MissingContext { key: "transaction" }
    ));
}

#[tokio::test]
async fn test_unknown_acting_identity_fails_with_not_found() {
    let f = fixture().await;
    let mut ctx = ctx("no-such-user");

    let err = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_persistence_failure_surfaces_unmodified() {
    let f = fixture().await;
    f.invoice_repository.poison("duplicate entry").await;
    let mut ctx = ctx(&f.user_id);

    let err = f.service.create_invoice(&mut ctx, input(100_000)).await.unwrap_err();
    assert!(matches!(err, DomainError::Dependency { .. }));
}

async fn seed_invoices(f: &Fixture, due_days: &[u32]) {
    let mut ctx = ctx(&f.user_id);
    for day in due_days {
        let mut inv = input(100_000);
        inv.payment_due_date = date(2025, 2, *day);
        f.service.create_invoice(&mut ctx, inv).await.unwrap();
    }
}

#[tokio::test]
async fn test_list_defaults_match_explicit_offset_and_limit() {
    let f = fixture().await;
    seed_invoices(&f, &[3, 1, 2]).await;

    let mut ctx_a = ctx(&f.user_id);
    let defaulted = f
        .service
        .list_by_due_date_range(&mut ctx_a, None, None, -1, 0)
        .await
        .unwrap();

    let mut ctx_b = ctx(&f.user_id);
    let explicit = f
        .service
        .list_by_due_date_range(&mut ctx_b, None, None, 0, 100)
        .await
        .unwrap();

    assert_eq!(defaulted, explicit);
    assert_eq!(defaulted.len(), 3);
}

#[tokio::test]
async fn test_unbounded_list_returns_all_ascending_by_due_date() {
    let f = fixture().await;
    seed_invoices(&f, &[3, 1, 2]).await;

    let mut ctx = ctx(&f.user_id);
    let invoices = f
        .service
        .list_by_due_date_range(&mut ctx, None, None, 0, 100)
        .await
        .unwrap();

    let due_dates: Vec<_> = invoices.iter().map(|i| i.payment_due_date).collect();
    assert_eq!(
        due_dates,
        vec![date(2025, 2, 1), date(2025, 2, 2), date(2025, 2, 3)]
    );
}

#[tokio::test]
async fn test_list_range_bounds_are_inclusive() {
    let f = fixture().await;
    seed_invoices(&f, &[1, 2, 3, 4]).await;

    let mut ctx = ctx(&f.user_id);
    let invoices = f
        .service
        .list_by_due_date_range(&mut ctx, Some(date(2025, 2, 2)), Some(date(2025, 2, 3)), 0, 100)
        .await
        .unwrap();

    let due_dates: Vec<_> = invoices.iter().map(|i| i.payment_due_date).collect();
    assert_eq!(due_dates, vec![date(2025, 2, 2), date(2025, 2, 3)]);
}

#[tokio::test]
async fn test_list_applies_offset_and_limit_after_ordering() {
    let f = fixture().await;
    seed_invoices(&f, &[5, 4, 3, 2, 1]).await;

    let mut ctx = ctx(&f.user_id);
    let invoices = f
        .service
        .list_by_due_date_range(&mut ctx, None, None, 1, 2)
        .await
        .unwrap();

    let due_dates: Vec<_> = invoices.iter().map(|i| i.payment_due_date).collect();
    assert_eq!(due_dates, vec![date(2025, 2, 2), date(2025, 2, 3)]);
}

#[tokio::test]
async fn test_list_with_no_matches_returns_empty_vec() {
    let f = fixture().await;
    seed_invoices(&f, &[1]).await;

    let mut ctx = ctx(&f.user_id);
    let invoices = f
        .service
        .list_by_due_date_range(&mut ctx, Some(date(2030, 1, 1)), None, 0, 100)
        .await
        .unwrap();

    assert!(invoices.is_empty());
}
