//! Integration tests for the JWT authentication middleware

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};

use pb_api::middleware::{AuthContext, JwtAuth};
use pb_core::services::{TokenService, TokenServiceConfig};

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().body(auth.user_id)
}

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new(
        "test-secret",
        3600,
    )))
}

macro_rules! protected_app {
    ($token_service:expr) => {
        test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(JwtAuth::new($token_service))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_valid_token_passes_identity_through() {
    let token_service = token_service();
    let token = token_service.generate_access_token("user-1").unwrap();
    let app = protected_app!(token_service);

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, "user-1");
}

#[actix_rt::test]
async fn test_missing_header_is_unauthorized() {
    let app = protected_app!(token_service());

    let req = test::TestRequest::get().uri("/protected").to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_malformed_header_is_unauthorized() {
    let app = protected_app!(token_service());

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Basic abc"))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_token_signed_with_another_secret_is_unauthorized() {
    let foreign = TokenService::new(TokenServiceConfig::new("other-secret", 3600));
    let token = foreign.generate_access_token("user-1").unwrap();
    let app = protected_app!(token_service());

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();

    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}
