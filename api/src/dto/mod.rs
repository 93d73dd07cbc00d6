//! Request and response DTOs for the HTTP surface

pub mod customer_dto;
pub mod error_dto;
pub mod product_dto;

pub use customer_dto::{CreateCustomerRequest, UpdateCustomerRequest};
pub use error_dto::ErrorResponse;
pub use product_dto::{CreateProductRequest, UpdateProductRequest};
