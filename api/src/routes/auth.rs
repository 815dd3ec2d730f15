//! Login endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use pb_core::{DomainError, RequestContext};

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::error::ApiError;

use super::finish_transaction;

/// `POST /api/login` - verify credentials and hand out a bearer token
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError(DomainError::validation(e.to_string())))?;

    let tx = state
        .pool
        .begin()
        .await
        .map_err(|e| ApiError(DomainError::dependency(e.to_string())))?;
    let mut ctx = RequestContext::new().with_transaction(tx);

    let result = state
        .auth_service
        .login(&mut ctx, &payload.email, &payload.password)
        .await;
    let token = finish_transaction(ctx, result).await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
