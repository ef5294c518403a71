//! Error types and response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, context)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry as a string
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.as_ref()?.get(key)?.as_str()
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorCode::InputUnreadable, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_format(err.to_string())
    }
}

/// Error response envelope
///
/// ```json
/// { "code": 4001, "category": "pricing", "message": "...", "details": { "price": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Category derived from the code range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
    /// Human-readable message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            category: Some(err.code.category()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            category: Some(err.code.category()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::PriceValidationFailed);
        assert_eq!(err.code, ErrorCode::PriceValidationFailed);
        assert_eq!(err.message, "Listing price fields are invalid");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::PriceValidationFailed)
            .with_detail("price", "Price is required")
            .with_detail("dealerDiscount", "out of range");

        assert_eq!(err.code, ErrorCode::PriceValidationFailed);
        assert_eq!(err.detail_str("price"), Some("Price is required"));
        assert_eq!(err.detail_str("dealerDiscount"), Some("out of range"));
        assert_eq!(err.detail_str("originalPrice"), None);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::internal("Something went wrong");
        assert_eq!(format!("{}", err), "Something went wrong");
    }

    #[test]
    fn test_from_io_and_json_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::InputUnreadable);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json.into();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::new(ErrorCode::PriceValidationFailed).with_detail("price", "required");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(4001));
        assert_eq!(response.category, Some(ErrorCategory::Pricing));
        assert!(response.data.is_none());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":4001"));
        assert!(json.contains("\"category\":\"pricing\""));
        assert!(json.contains("\"price\":\"required\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_api_response_from_error() {
        let response: ApiResponse<String> = AppError::new(ErrorCode::InternalError).into();
        assert_eq!(response.code, Some(9001));
        assert_eq!(response.category, Some(ErrorCategory::System));
        assert_eq!(response.message, "Internal error");
    }
}
