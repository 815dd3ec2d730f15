//! Company entity: the corporation issuing invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A billing company registered in the system
///
/// Companies own users, clients, and invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier, assigned by the store at creation time
    pub id: String,

    /// Legal corporate name
    pub corporate_name: String,

    /// Name of the company representative
    pub representative_name: String,

    /// Contact phone number
    pub phone_number: String,

    /// Postal code
    pub postal_code: String,

    /// Postal address
    pub address: String,

    /// Timestamp when the company was created (store-assigned)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the company was last updated (store-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a [`Company`]
///
/// Carries every caller-supplied field; identifier and timestamps are
/// assigned by the store when the company is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub corporate_name: String,
    pub representative_name: String,
    pub phone_number: String,
    pub postal_code: String,
    pub address: String,
}
