use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use se_api::app::create_app;
use se_api::routes::AppState;
use se_core::services::{CustomerService, ProductService};
use se_infra::database::{DatabasePool, MySqlCustomerRepository, MySqlProductRepository};
use se_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting ShopEasy API server");

    // Load configuration
    let config = AppConfig::from_env();
    info!(
        "Environment: {:?}, database: {}",
        config.environment,
        if config.database.is_production() { "remote" } else { "local" }
    );

    // Initialize database connection pool
    let pool = DatabasePool::new(config.database.clone())
        .await
        .expect("Failed to connect to the database");
    info!("Database pool ready: {}", pool.statistics());

    // Create repository implementations
    let customer_repository = Arc::new(MySqlCustomerRepository::new(pool.pool().clone()));
    let product_repository = Arc::new(MySqlProductRepository::new(pool.pool().clone()));

    // Create services with explicit constructor injection
    let customer_service = Arc::new(CustomerService::new(customer_repository));
    let product_service = Arc::new(ProductService::new(product_repository));

    let app_state = web::Data::new(AppState {
        customer_service,
        product_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
