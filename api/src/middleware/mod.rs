//! HTTP middleware.

pub mod auth;

use actix_cors::Cors;

pub use auth::{AuthContext, JwtAuth};

/// Permissive CORS policy for the API
pub fn create_cors() -> Cors {
    Cors::permissive()
}
