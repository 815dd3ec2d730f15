//! User entity: an authenticating member of a billing company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Users authenticate with email and password and act as the issuing
/// identity when invoices are created. Email is unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store at creation time
    pub id: String,

    /// Identifier of the owning company
    pub company_id: String,

    /// Display name
    pub name: String,

    /// Email address, globally unique
    pub email: String,

    /// Bcrypt hash of the user's password; never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the user was created (store-assigned)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated (store-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a [`User`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: "user-1".to_string(),
            company_id: "company-1".to_string(),
            name: "admin".to_string(),
            email: "admin@localhost.ai".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$12$secret"));
    }
}
