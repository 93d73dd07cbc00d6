use actix_web::{web, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::handlers::error::handle_app_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/customers
pub async fn list_customers<C, P>(state: web::Data<AppState<C, P>>) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    log::info!("Listing customers");

    match state.customer_service.list_customers().await {
        Ok(customers) => {
            let count = customers.len();
            HttpResponse::Ok().json(ApiResponse::success_with_count(
                customers,
                "Customers retrieved successfully",
                count,
            ))
        }
        Err(error) => handle_app_error(&error),
    }
}
