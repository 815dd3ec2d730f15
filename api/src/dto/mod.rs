//! Request and response data transfer objects.

pub mod auth;
pub mod invoice;

pub use auth::{LoginRequest, LoginResponse};
pub use invoice::{CreateInvoiceRequest, InvoiceResponse, ListInvoicesQuery};
