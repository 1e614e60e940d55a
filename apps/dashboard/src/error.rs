//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Moto Stock                             │
//! │                                                                         │
//! │  Command Function  Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unknown id? ────────── StoreError::NotFound ───────┐                  │
//! │         │                                          │                  │
//! │         ▼                                          ▼                  │
//! │  Bad filter value? ─── CoreError::InvalidValue ── ApiError ──► caller │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────────► caller   │
//! │                                                                         │
//! │  Front-end receives { "code": "NOT_FOUND", "message": "..." }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::state::ConfigError;
use moto_core::CoreError;
use moto_store::StoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Motorcycle not found: 999"
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

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Dataset or repository failure (500)
    StoreError,

    /// Internal error (500)
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::DuplicateId(id) => {
                ApiError::validation(format!("id '{}' already exists", id))
            }
            StoreError::InvalidRecord { id, reason } => {
                ApiError::validation(format!("Invalid motorcycle {}: {}", id, reason))
            }
            StoreError::Io(e) => {
                tracing::error!("Dataset read failed: {}", e);
                ApiError::new(ErrorCode::StoreError, "Dataset could not be read")
            }
            StoreError::Json(e) => {
                tracing::error!("Dataset parse failed: {}", e);
                ApiError::new(ErrorCode::StoreError, format!("Dataset is malformed: {}", e))
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(msg) => ApiError::validation(msg),
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Motorcycle", "999");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Motorcycle not found: 999");
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: ApiError = StoreError::not_found("Motorcycle", "7").into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_invalid_filter_maps_to_validation() {
        let err: ApiError = CoreError::invalid("status", "parked").into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid status: 'parked'");
    }

    #[test]
    fn test_dataset_errors_map_to_store_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ApiError = StoreError::Io(io).into();
        assert_eq!(err.code, ErrorCode::StoreError);
        assert_eq!(
            serde_json::to_value(ErrorCode::StoreError).unwrap(),
            "STORE_ERROR"
        );
    }
}
