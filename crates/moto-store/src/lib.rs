//! # moto-store: Canonical Collection for Moto Stock
//!
//! Owns the one record collection every dashboard view reads from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Moto Stock Data Flow                             │
//! │                                                                         │
//! │  Dashboard command (list_catalog)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   moto-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     seed      │    │  Repository   │    │    error     │  │   │
//! │  │   │  (built-in    │───►│ (motorcycle)  │    │  StoreError  │  │   │
//! │  │   │   dataset)    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                    moto-core query / stats                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`seed`] - Built-in six-model dataset
//! - [`error`] - Store error types
//! - [`repository`] - `MotorcycleRepository`

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::motorcycle::MotorcycleRepository;
