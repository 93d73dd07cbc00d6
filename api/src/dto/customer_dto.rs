//! Customer request DTOs with field-level validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use se_core::services::{CreateCustomerData, UpdateCustomerData};

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex must compile"));

/// Request body for POST /customers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    pub last_name: String,

    #[validate(regex(path = "PHONE_REGEX", message = "Please provide a valid phone number"))]
    pub phone: Option<String>,
}

impl From<CreateCustomerRequest> for CreateCustomerData {
    fn from(request: CreateCustomerRequest) -> Self {
        Self {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }
}

/// Request body for PUT /customers/{id}
///
/// Email is immutable after creation and is deliberately absent here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    pub last_name: Option<String>,

    #[validate(regex(path = "PHONE_REGEX", message = "Please provide a valid phone number"))]
    pub phone: Option<String>,
}

impl From<UpdateCustomerRequest> for UpdateCustomerData {
    fn from(request: UpdateCustomerRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }
}
