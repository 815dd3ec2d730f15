//! Bank account entity attached to a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank account payments to a client are transferred to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBankAccount {
    /// Unique identifier, assigned by the store at creation time
    pub id: String,

    /// Identifier of the owning client
    pub client_id: String,

    /// Bank name
    pub bank_name: String,

    /// Branch name
    pub branch_name: String,

    /// Account number
    pub account_number: String,

    /// Account holder name
    pub account_name: String,

    /// Timestamp when the account was created (store-assigned)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated (store-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a [`ClientBankAccount`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClientBankAccount {
    pub client_id: String,
    pub bank_name: String,
    pub branch_name: String,
    pub account_number: String,
    pub account_name: String,
}
