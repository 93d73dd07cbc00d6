use actix_web::{web, HttpResponse};
use validator::Validate;

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::dto::UpdateProductRequest;
use crate::handlers::error::{handle_app_error, validation_failure};
use crate::routes::{parse_uuid, AppState};

/// Handler for PUT /api/v1/products/{id}
pub async fn update_product<C, P>(
    state: web::Data<AppState<C, P>>,
    path: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_uuid(&path, "product") {
        Ok(id) => id,
        Err(response) => return response,
    };

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state
        .product_service
        .update_product(id, request.into_inner().into())
        .await
    {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::success(
            product,
            "Product updated successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
