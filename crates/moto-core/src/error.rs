//! # Error Types
//!
//! Domain-specific error types for moto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  moto-core errors (this file)                                          │
//! │  └── CoreError        - Unparsable filter and sort values              │
//! │                                                                         │
//! │  moto-store errors (separate crate)                                    │
//! │  └── StoreError       - Seeding and replace-by-id failures             │
//! │                                                                         │
//! │  moto-dashboard errors (app)                                           │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CoreError / StoreError → ApiError → Front-end                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself never fails on structurally valid input. The only
//! error-shaped outcome here is a filter string that names no known value;
//! lookup misses are `Option`s, reported by the store as `NotFound`.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A filter or sort value coming from the UI names no known variant.
    ///
    /// ## When This Occurs
    /// - Status drop-down sends a label the dataset never used
    /// - Sort parameter is mistyped (`price_up` instead of `price-asc`)
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}

impl CoreError {
    /// Creates an InvalidValue error for a field.
    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        CoreError::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
