//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ShopFlow                               │
//! │                                                                         │
//! │  Gesture line ──► Command::from_str ── bad input ──► BAD_REQUEST       │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                   command function                                      │
//! │                   Result<T, ApiError>                                   │
//! │                         │                                               │
//! │       CoreError::InvalidCategory ───────────────────► INVALID_CATEGORY │
//! │       CoreError::UnknownProduct ────────────────────► UNKNOWN_PRODUCT  │
//! │       CoreError::Validation ────────────────────────► VALIDATION_ERROR │
//! │                                                                         │
//! │  Every ApiError is written back as a JSON reply; the session goes on.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Startup failures are different: they end the process, so they live in
//! [`AppError`].

use serde::Serialize;
use shopflow_core::CoreError;
use thiserror::Error;

/// Error returned from a command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_PRODUCT",
///   "message": "Unknown product: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Category is not one of the chips
    InvalidCategory,

    /// Product id is not in the catalog
    UnknownProduct,

    /// Seed data failed validation
    ValidationError,

    /// Gesture line could not be parsed
    BadRequest,

    /// Reply could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            CoreError::UnknownProduct(_) => ErrorCode::UnknownProduct,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Reply serialization failed: {}", err);
        ApiError::internal("Could not serialize reply")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that stop the storefront process.
#[derive(Debug, Error)]
pub enum AppError {
    /// The session could not be built from seed data and config.
    #[error("Session setup failed: {0}")]
    Session(#[from] CoreError),

    /// Reading gestures or writing replies failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A reply could not be encoded.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::{ProductId, ValidationError};

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = ApiError::from(CoreError::InvalidCategory("Shoes".to_string()));
        assert_eq!(err.code, ErrorCode::InvalidCategory);
        assert_eq!(err.message, "Invalid category: Shoes");

        let err = ApiError::from(CoreError::UnknownProduct(ProductId::new(42)));
        assert_eq!(err.code, ErrorCode::UnknownProduct);
        assert_eq!(err.message, "Unknown product: 42");

        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "title".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::bad_request("Unknown gesture: dance");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "Unknown gesture: dance");
    }
}
