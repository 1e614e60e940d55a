//! # moto-core: Pure Inventory Logic for the Dealership Dashboard
//!
//! This crate holds the record model and the query engine behind every
//! dashboard view. Everything here is a pure function over a borrowed
//! collection: no I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dealership Dashboard                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (dashboard, catalog, stock)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    moto-dashboard (app)                         │   │
//! │  │    dashboard_metrics, list_catalog, stock_report, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ moto-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   query   │  │   stats   │  │   │
//! │  │   │Motorcycle │  │   Money   │  │  Criteria │  │  Summary  │  │   │
//! │  │   │  Status   │  │           │  │  SortKey  │  │  Facets   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO MUTATION OF INPUTS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               moto-store (canonical collection)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Motorcycle` record and its enumerations
//! - [`money`] - Integer money (minor units, no floating point)
//! - [`query`] - Filter criteria, sort keys, the catalog pipeline
//! - [`stats`] - Totals, best/worst sellers, grouped stock, facets
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use moto_core::query::{self, Criteria, SortKey};
//! use moto_core::stats;
//! use moto_core::{Category, Motorcycle, Status};
//!
//! let records = vec![
//!     Motorcycle::new("1", "Honda", "CBR 600RR", Category::Sport)
//!         .with_price_major(45_000)
//!         .with_stock(8)
//!         .with_sales(24),
//!     Motorcycle::new("2", "Yamaha", "MT-07", Category::Naked)
//!         .with_price_major(38_000)
//!         .with_stock(12)
//!         .with_sales(18),
//! ];
//!
//! let hondas = query::filter(&records, &Criteria::all().with_brand("Honda"));
//! assert_eq!(hondas.len(), 1);
//!
//! let cheapest_first = query::sort(&records, SortKey::PriceAsc);
//! assert_eq!(cheapest_first[0].id, "2");
//!
//! assert_eq!(stats::total_stock(&records), 20);
//! assert_eq!(stats::total_value(&records).major(), 816_000);
//! assert!(records.iter().all(|m| m.status == Status::Available));
//! ```

pub mod error;
pub mod money;
pub mod query;
pub mod stats;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

/// Sentinel used by the front-end filter drop-downs for "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Units below which a model is flagged as low stock.
///
/// Matches the red highlight threshold of the stock table.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Number of models shown in the dashboard best-seller strip.
pub const DEFAULT_BEST_SELLING_LIMIT: usize = 3;

/// Group key for records that have no value for the grouping field.
pub const UNASSIGNED_GROUP: &str = "unassigned";
