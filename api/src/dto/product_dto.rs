//! Product request DTOs.
//!
//! Price and stock invariants are owned by the service layer; the DTO only
//! enforces shape-level rules.

use serde::Deserialize;
use validator::Validate;

use se_core::services::{CreateProductData, UpdateProductData};

/// Request body for POST /products
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: String,

    pub price: f64,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub stock: i32,
}

impl From<CreateProductRequest> for CreateProductData {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            stock: request.stock,
        }
    }
}

/// Request body for PUT /products/{id}
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub price: Option<f64>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    pub stock: Option<i32>,
}

impl From<UpdateProductRequest> for UpdateProductData {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            stock: request.stock,
        }
    }
}
