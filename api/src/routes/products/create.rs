use actix_web::{web, HttpResponse};
use validator::Validate;

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::dto::CreateProductRequest;
use crate::handlers::error::{handle_app_error, validation_failure};
use crate::routes::AppState;

/// Handler for POST /api/v1/products
///
/// Price and stock invariants are enforced by the product service; an
/// invalid price or negative stock comes back as 400 without touching
/// storage.
pub async fn create_product<C, P>(
    state: web::Data<AppState<C, P>>,
    request: web::Json<CreateProductRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    log::info!("Creating product");

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state
        .product_service
        .create_product(request.into_inner().into())
        .await
    {
        Ok(product) => HttpResponse::Created().json(ApiResponse::success(
            product,
            "Product created successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
