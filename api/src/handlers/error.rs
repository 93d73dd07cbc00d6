//! Translation of application failures into transport responses.
//!
//! This is the only place where `AppError` meets HTTP. Every code in the
//! taxonomy is mapped explicitly so that no error kind falls back to a
//! silent 500.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use se_core::errors::AppError;

use crate::dto::ErrorResponse;

/// HTTP status for each error kind
fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
        AppError::PaymentFailed { .. } => StatusCode::PAYMENT_REQUIRED,
        AppError::ExternalService { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert an application failure into its wire response
pub fn handle_app_error(error: &AppError) -> HttpResponse {
    log::error!("Request failed: {}", error);

    ErrorResponse::new(error.code().to_string(), error.to_string()).to_response(status_for(error))
}

/// Convert request-body validation failures into a 400 with field details
pub fn validation_failure(errors: &validator::ValidationErrors) -> HttpResponse {
    let field_errors: HashMap<String, Vec<String>> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    log::warn!("Request validation failed: {:?}", field_errors);

    ErrorResponse::new(
        "VALIDATION_ERROR".to_string(),
        "Invalid request data".to_string(),
    )
    .with_details(serde_json::json!(field_errors))
    .to_response(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_are_mapped_explicitly() {
        let cases = [
            (AppError::validation("x"), StatusCode::BAD_REQUEST),
            (AppError::not_found("Customer"), StatusCode::NOT_FOUND),
            (
                AppError::InsufficientStock {
                    product: "widget".to_string(),
                    requested: 2,
                    available: 1,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::PaymentFailed {
                    message: "declined".to_string(),
                },
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                AppError::ExternalService {
                    message: "timeout".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (AppError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "wrong status for {:?}", error);
        }
    }

    #[test]
    fn test_handle_app_error_uses_wire_code() {
        let response = handle_app_error(&AppError::not_found("Product"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
