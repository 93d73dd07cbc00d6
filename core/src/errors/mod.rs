//! Application error taxonomy and result alias.
//!
//! Every fallible operation in the system returns [`AppResult`]. Failures are
//! represented by [`AppError`], a closed set of error kinds; the presentation
//! layer maps each kind to an HTTP status and a stable wire code. Underlying
//! storage faults are logged where they are caught (the repository adapters)
//! and never carried in the client-visible message.

use thiserror::Error;

/// Closed set of application errors
///
/// `Result` misuse (reading a value out of a failure) is unrepresentable:
/// the standard library's `Result` enforces variant checking at compile time,
/// and `?` / `and_then` provide short-circuiting composition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },

    #[error("Payment failed: {message}")]
    PaymentFailed { message: String },

    #[error("External service error: {message}")]
    ExternalService { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error with a sanitized message
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }

    /// Stable wire code for client-side handling
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            AppError::PaymentFailed { .. } => "PAYMENT_FAILED",
            AppError::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Universal result alias for fallible operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_are_stable() {
        assert_eq!(AppError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::not_found("Customer").code(), "NOT_FOUND");
        assert_eq!(
            AppError::InsufficientStock {
                product: "widget".to_string(),
                requested: 5,
                available: 2,
            }
            .code(),
            "INSUFFICIENT_STOCK"
        );
        assert_eq!(
            AppError::PaymentFailed {
                message: "declined".to_string()
            }
            .code(),
            "PAYMENT_FAILED"
        );
        assert_eq!(
            AppError::ExternalService {
                message: "timeout".to_string()
            }
            .code(),
            "EXTERNAL_SERVICE_ERROR"
        );
        assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_display_messages() {
        let error = AppError::not_found("Customer");
        assert_eq!(error.to_string(), "Customer not found");

        let error = AppError::InsufficientStock {
            product: "widget".to_string(),
            requested: 5,
            available: 2,
        };
        assert!(error.to_string().contains("requested 5"));
        assert!(error.to_string().contains("available 2"));
    }
}
