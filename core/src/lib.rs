//! # PayBridge Core
//!
//! Core business logic and domain layer for the PayBridge backend.
//! This crate contains domain entities, business services, repository
//! interfaces, the request context, and error types that form the foundation
//! of the application architecture.

pub mod context;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use context::RequestContext;
pub use errors::{DomainError, DomainResult};
