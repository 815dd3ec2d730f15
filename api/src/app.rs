//! Application state shared across request handlers.

use std::sync::Arc;

use sqlx::MySqlPool;

use pb_core::services::{AuthService, InvoiceService};
use pb_infra::{MySqlInvoiceRepository, MySqlUserRepository};

/// Authentication service wired to the MySQL repositories
pub type ApiAuthService = AuthService<MySqlUserRepository>;

/// Invoice service wired to the MySQL repositories
pub type ApiInvoiceService = InvoiceService<MySqlInvoiceRepository, MySqlUserRepository>;

/// Shared application state
///
/// The pool is used by handlers to begin the per-request transaction that
/// the core services run against.
pub struct AppState {
    /// Database connection pool
    pub pool: MySqlPool,
    /// Authentication service
    pub auth_service: Arc<ApiAuthService>,
    /// Invoice service
    pub invoice_service: Arc<ApiInvoiceService>,
}
