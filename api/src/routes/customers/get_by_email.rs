use actix_web::{web, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::handlers::error::handle_app_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/customers/by-email/{email}
pub async fn get_customer_by_email<C, P>(
    state: web::Data<AppState<C, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let email = path.into_inner();
    log::info!("Fetching customer by email");

    match state.customer_service.get_customer_by_email(&email).await {
        Ok(customer) => HttpResponse::Ok().json(ApiResponse::success(
            customer,
            "Customer retrieved successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
