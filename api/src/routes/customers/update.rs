use actix_web::{web, HttpResponse};
use validator::Validate;

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::dto::UpdateCustomerRequest;
use crate::handlers::error::{handle_app_error, validation_failure};
use crate::routes::{parse_uuid, AppState};

/// Handler for PUT /api/v1/customers/{id}
pub async fn update_customer<C, P>(
    state: web::Data<AppState<C, P>>,
    path: web::Path<String>,
    request: web::Json<UpdateCustomerRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_uuid(&path, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state
        .customer_service
        .update_customer(id, request.into_inner().into())
        .await
    {
        Ok(customer) => HttpResponse::Ok().json(ApiResponse::success(
            customer,
            "Customer updated successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
