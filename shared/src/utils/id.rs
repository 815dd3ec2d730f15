//! Time-ordered identifier generation
//!
//! Entity identifiers are UUIDv7 strings: lexicographically sortable,
//! time-ordered, and unique. All ids are drawn through one process-wide
//! [`ContextV7`] so ids generated within the same millisecond still sort in
//! creation order.

use once_cell::sync::Lazy;
use std::sync::Mutex;
use uuid::timestamp::context::ContextV7;
use uuid::{Timestamp, Uuid};

static CONTEXT: Lazy<Mutex<ContextV7>> = Lazy::new(|| Mutex::new(ContextV7::new()));

/// Generate a new time-ordered identifier string
pub fn generate_id() -> String {
    Uuid::new_v7(Timestamp::now(&*CONTEXT)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_ids_sort_in_creation_order() {
        let ids: Vec<String> = (0..64).map(|_| generate_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_generated_ids_parse_as_uuid() {
        let id = generate_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
