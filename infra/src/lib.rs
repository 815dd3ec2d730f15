//! # PayBridge Infrastructure
//!
//! Infrastructure layer for the PayBridge backend: MySQL implementations of
//! the core repository ports and database pool construction. All queries run
//! against the request's transaction handle; this layer never begins or
//! commits transactions on its own.

pub mod database;

pub use database::mysql::{
    MySqlClientBankAccountRepository, MySqlClientRepository, MySqlCompanyRepository,
    MySqlInvoiceRepository, MySqlUserRepository,
};
pub use database::{connect_pool, MySqlTx};
