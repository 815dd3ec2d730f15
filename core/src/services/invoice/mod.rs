//! Invoice service module
//!
//! Orchestrates invoice creation (monetary computation + persistence) and
//! ranged, paginated invoice listing.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CreateInvoiceInput, InvoiceService};
