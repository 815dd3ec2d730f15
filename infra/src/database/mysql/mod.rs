//! MySQL implementations of the repository ports.

mod client_bank_account_repository_impl;
mod client_repository_impl;
mod company_repository_impl;
mod invoice_repository_impl;
mod rows;
mod user_repository_impl;

pub use client_bank_account_repository_impl::MySqlClientBankAccountRepository;
pub use client_repository_impl::MySqlClientRepository;
pub use company_repository_impl::MySqlCompanyRepository;
pub use invoice_repository_impl::MySqlInvoiceRepository;
pub use user_repository_impl::MySqlUserRepository;

use pb_core::DomainError;

/// Translate a sqlx error into the domain error taxonomy
///
/// Duplicate-key violations become conflicts; everything else is a
/// dependency failure surfaced with its driver message.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DomainError::Conflict {
            message: db_err.to_string(),
        },
        other => DomainError::Dependency {
            message: other.to_string(),
        },
    }
}
