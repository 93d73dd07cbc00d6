//! Route handlers and shared application state

pub mod customers;
pub mod products;

use std::sync::Arc;

use actix_web::HttpResponse;
use uuid::Uuid;

use se_core::errors::AppError;
use se_core::repositories::{CustomerRepository, ProductRepository};
use se_core::services::{CustomerService, ProductService};

use crate::handlers::error::handle_app_error;

/// Application state holding the shared services
///
/// Assembled once at startup with explicit constructor injection; handlers
/// are generic over the repository types so tests can wire in-memory
/// implementations.
pub struct AppState<C, P>
where
    C: CustomerRepository,
    P: ProductRepository,
{
    pub customer_service: Arc<CustomerService<C>>,
    pub product_service: Arc<ProductService<P>>,
}

/// Parse a path segment into a Uuid, or produce the 400 response
pub(crate) fn parse_uuid(raw: &str, resource: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        handle_app_error(&AppError::validation(format!("Invalid {} id", resource)))
    })
}
