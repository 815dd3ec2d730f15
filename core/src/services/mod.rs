//! Business services orchestrating the domain layer.

pub mod auth;
pub mod invoice;
pub mod token;

pub use auth::AuthService;
pub use invoice::{CreateInvoiceInput, InvoiceService};
pub use token::{Claims, TokenService, TokenServiceConfig};
