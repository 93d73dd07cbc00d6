use actix_web::{web, HttpResponse};
use validator::Validate;

use se_core::repositories::{CustomerRepository, ProductRepository};
use se_shared::types::ApiResponse;

use crate::dto::CreateCustomerRequest;
use crate::handlers::error::{handle_app_error, validation_failure};
use crate::routes::AppState;

/// Handler for POST /api/v1/customers
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jo.doe@example.com",
///     "first_name": "Jo",
///     "last_name": "Do",
///     "phone": "+573001234567"
/// }
/// ```
///
/// Returns 201 with the created customer (including the derived `full_name`)
/// or 400 when the body is invalid or the email is already registered.
pub async fn create_customer<C, P>(
    state: web::Data<AppState<C, P>>,
    request: web::Json<CreateCustomerRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
{
    log::info!("Creating customer");

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    match state
        .customer_service
        .create_customer(request.into_inner().into())
        .await
    {
        Ok(customer) => HttpResponse::Created().json(ApiResponse::success(
            customer,
            "Customer created successfully",
        )),
        Err(error) => handle_app_error(&error),
    }
}
