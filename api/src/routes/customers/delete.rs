use actix_web::{web, HttpResponse};

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::handlers::error::handle_app_error;
use crate::routes::{parse_uuid, AppState};

/// Handler for DELETE /api/v1/customers/{id}
pub async fn delete_customer<C, P>(
    state: web::Data<AppState<C, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_uuid(&path, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.customer_service.delete_customer(id).await {
        Ok(()) => HttpResponse::Ok()
            .json(ApiResponse::<()>::message_only("Customer deleted successfully")),
        Err(error) => handle_app_error(&error),
    }
}
