//! Route configuration and shared handler plumbing.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use pb_core::services::TokenService;
use pb_core::{DomainError, RequestContext};
use pb_infra::MySqlTx;

use crate::error::ApiError;
use crate::middleware::JwtAuth;

pub mod auth;
pub mod invoices;

/// Wire up all API routes
///
/// The invoice routes sit behind the JWT middleware; login does not.
pub fn configure(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api")
            .route("/login", web::post().to(auth::login))
            .service(
                web::scope("/invoices")
                    .wrap(JwtAuth::new(token_service))
                    .route("", web::post().to(invoices::create_invoice))
                    .route("", web::get().to(invoices::get_invoices)),
            ),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Commit or roll back the request's transaction after the core returns
///
/// The service outcome wins over a rollback failure; a commit failure turns
/// the outcome into a dependency error since nothing was durably written.
pub(crate) async fn finish_transaction<T>(
    mut ctx: RequestContext<MySqlTx>,
    result: Result<T, DomainError>,
) -> Result<T, ApiError> {
    match result {
        Ok(value) => {
            if let Some(tx) = ctx.take_transaction() {
                tx.commit()
                    .await
                    .map_err(|e| ApiError(DomainError::dependency(e.to_string())))?;
            }
            Ok(value)
        }
        Err(err) => {
            if let Some(tx) = ctx.take_transaction() {
                let _ = tx.rollback().await;
            }
            Err(ApiError(err))
        }
    }
}
