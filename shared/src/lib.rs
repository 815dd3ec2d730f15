//! Shared utilities and common types for the PayBridge server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Identifier generation

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, BillingConfig, DatabaseConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::id::generate_id;
