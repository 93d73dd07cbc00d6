//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API success envelope
///
/// Failures are serialized separately by the presentation layer; this wrapper
/// is only ever constructed with `success: true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (absent for message-only responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable outcome description
    pub message: String,

    /// Number of items in `data` (collection responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying a payload
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            count: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a successful collection response with an item count
    pub fn success_with_count(data: T, message: impl Into<String>, count: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            count: Some(count),
            timestamp: Utc::now(),
        }
    }

    /// Create a successful response without a payload (e.g. after deletion)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            count: None,
            timestamp: Utc::now(),
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success(42, "Answer retrieved successfully");
        assert!(response.success);
        assert_eq!(response.data, Some(42));
        assert_eq!(response.count, None);
    }

    #[test]
    fn test_collection_response_carries_count() {
        let response = ApiResponse::success_with_count(vec![1, 2, 3], "ok", 3);
        assert_eq!(response.count, Some(3));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_message_only_omits_data() {
        let response = ApiResponse::<()>::message_only("Deleted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("data").is_none());
        assert!(json.get("count").is_none());
        assert_eq!(json["message"], "Deleted successfully");
    }
}
