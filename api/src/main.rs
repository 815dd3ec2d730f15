use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use pb_api::app::AppState;
use pb_api::middleware::create_cors;
use pb_api::routes;
use pb_core::services::{AuthService, InvoiceService, TokenService, TokenServiceConfig};
use pb_infra::{connect_pool, MySqlInvoiceRepository, MySqlUserRepository};
use pb_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting PayBridge API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Database connection
    let pool = connect_pool(&config.database)
        .await
        .expect("failed to connect to database");

    // Dependency injection
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let user_repository = Arc::new(MySqlUserRepository::new());
    let invoice_repository = Arc::new(MySqlInvoiceRepository::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let invoice_service = Arc::new(InvoiceService::new(
        invoice_repository,
        user_repository,
        config.billing.clone(),
    ));

    let state = web::Data::new(AppState {
        pool,
        auth_service,
        invoice_service,
    });

    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, Arc::clone(&token_service)))
    })
    .bind(bind_address)?
    .run()
    .await
}
