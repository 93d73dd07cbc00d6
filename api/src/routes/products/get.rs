use actix_web::{web, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::handlers::error::handle_app_error;
use crate::routes::{parse_uuid, AppState};

/// Handler for GET /api/v1/products/{id}
pub async fn get_product<C, P>(
    state: web::Data<AppState<C, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_uuid(&path, "product") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.product_service.get_product(id).await {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::success(
            product,
            "Product retrieved successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
