//! Domain entities owned by a billing company.

pub mod client;
pub mod client_bank_account;
pub mod company;
pub mod invoice;
pub mod user;

pub use client::{Client, NewClient};
pub use client_bank_account::{ClientBankAccount, NewClientBankAccount};
pub use company::{Company, NewCompany};
pub use invoice::{Invoice, NewInvoice};
pub use user::{NewUser, User};
