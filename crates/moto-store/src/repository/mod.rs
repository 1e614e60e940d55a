//! # Repository Module
//!
//! Access to the canonical record collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Dashboard command                                                     │
//! │       │                                                                 │
//! │       │  state.motorcycles().search(&criteria, SortKey::Name)          │
//! │       ▼                                                                 │
//! │  MotorcycleRepository                                                  │
//! │  ├── all(&self)                                                        │
//! │  ├── get_by_id(&self, id) / require(&self, id)                         │
//! │  ├── search(&self, criteria, key)                                      │
//! │  ├── summary(&self, options)                                           │
//! │  └── replace_by_id(&mut self, id, record)   ← the only write           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Motorcycle> (owned, seeded once, never reordered)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MotorcycleRepository`](motorcycle::MotorcycleRepository) - Catalog lookup, query, replace-by-id

pub mod motorcycle;
