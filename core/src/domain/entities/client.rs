//! Client entity: the billed counterparty of a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client corporation billed by a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, assigned by the store at creation time
    pub id: String,

    /// Identifier of the owning company
    pub company_id: String,

    /// Legal corporate name
    pub corporate_name: String,

    /// Name of the client representative
    pub representative_name: String,

    /// Contact phone number
    pub phone_number: String,

    /// Postal code
    pub postal_code: String,

    /// Postal address
    pub address: String,

    /// Timestamp when the client was created (store-assigned)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the client was last updated (store-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a [`Client`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub company_id: String,
    pub corporate_name: String,
    pub representative_name: String,
    pub phone_number: String,
    pub postal_code: String,
    pub address: String,
}
