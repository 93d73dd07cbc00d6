//! Error envelope returned for every failed request.

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of a failure
///
/// `error` carries the stable code from the `AppError` taxonomy; `details`
/// is only ever populated with field-level validation errors, never with
/// internal diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self {
            success: false,
            error,
            message,
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let response = ErrorResponse::new("NOT_FOUND".to_string(), "Customer not found".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "NOT_FOUND");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_details_serialized_when_present() {
        let response = ErrorResponse::new("VALIDATION_ERROR".to_string(), "Invalid".to_string())
            .with_details(serde_json::json!({"email": ["bad format"]}));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["details"]["email"][0], "bad format");
    }
}
