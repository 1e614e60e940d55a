//! # Store Error Types
//!
//! Error types for seeding and mutating the collection.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Dataset file (std::io::Error, serde_json::Error)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (dashboard app) ← Serialized for the front-end               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Collection errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the requested id.
    ///
    /// ## When This Occurs
    /// - `require` on an unknown id
    /// - `replace_by_id` on an unknown id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Two seed records share an id.
    #[error("Duplicate id: '{0}' already exists")]
    DuplicateId(String),

    /// A seed record breaks a record invariant (negative price).
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Dataset file could not be read.
    #[error("Dataset read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not a JSON array of records.
    #[error("Dataset parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidRecord error.
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Motorcycle", "999").to_string(),
            "Motorcycle not found: 999"
        );
        assert_eq!(
            StoreError::DuplicateId("1".into()).to_string(),
            "Duplicate id: '1' already exists"
        );
        assert_eq!(
            StoreError::invalid("4", "negative price").to_string(),
            "Invalid record '4': negative price"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: StoreError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
