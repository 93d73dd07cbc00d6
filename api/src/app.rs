//! Application factory
//!
//! Builds the Actix-web application from an already-wired [`AppState`]; the
//! binary and the integration tests both go through this factory.

use actix_web::body::MessageBody;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};

use crate::dto::ErrorResponse;
use crate::middleware::cors::create_cors;
use crate::routes::customers::{
    create_customer, delete_customer, get_customer, get_customer_by_email, list_customers,
    update_customer,
};
use crate::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<C, P>(
    app_state: web::Data<AppState<C, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/customers")
                        .route("", web::get().to(list_customers::<C, P>))
                        .route("", web::post().to(create_customer::<C, P>))
                        .route("/by-email/{email}", web::get().to(get_customer_by_email::<C, P>))
                        .route("/{id}", web::get().to(get_customer::<C, P>))
                        .route("/{id}", web::put().to(update_customer::<C, P>))
                        .route("/{id}", web::delete().to(delete_customer::<C, P>)),
                )
                .service(
                    web::scope("/products")
                        .route("", web::get().to(list_products::<C, P>))
                        .route("", web::post().to(create_product::<C, P>))
                        .route("/{id}", web::get().to(get_product::<C, P>))
                        .route("/{id}", web::put().to(update_product::<C, P>))
                        .route("/{id}", web::delete().to(delete_product::<C, P>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shop-easy-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(
        "NOT_FOUND".to_string(),
        "The requested resource was not found".to_string(),
    )
    .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
