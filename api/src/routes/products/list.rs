use actix_web::{web, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::handlers::error::handle_app_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/products
pub async fn list_products<C, P>(state: web::Data<AppState<C, P>>) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    log::info!("Listing products");

    match state.product_service.list_products().await {
        Ok(products) => {
            let count = products.len();
            HttpResponse::Ok().json(ApiResponse::success_with_count(
                products,
                "Products retrieved successfully",
                count,
            ))
        }
        Err(error) => handle_app_error(&error),
    }
}
