//! # Commands Module
//!
//! Every operation the dashboard front-end can call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── dashboard.rs   ◄─── Metric cards, best/worst sellers, charts
//! ├── catalog.rs     ◄─── Filtered + sorted grid, filter facets
//! ├── stock.rs       ◄─── Stock table with low-stock flags and totals
//! └── motorcycle.rs  ◄─── Detail view, edit form
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end filters (raw UI strings, "all" = no constraint)             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  list_catalog(&state, FilterInput) -> Result<CatalogPage, ApiError>    │
//! │         │                                                               │
//! │         │  FilterInput::criteria()  ── parse, "all" → None             │
//! │         │  repository.search()      ── moto_core::query                │
//! │         ▼                                                               │
//! │  CatalogPage { items: MotorcycleDto[], shown, total, ... }  (camelCase)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Access
//! Reads take `&AppState`; `update_motorcycle` is the only command taking
//! `&mut AppState`.

pub mod catalog;
pub mod dashboard;
pub mod motorcycle;
pub mod stock;

pub use catalog::{catalog_facets, list_catalog, CatalogPage, FilterInput};
pub use dashboard::{dashboard_metrics, stock_charts, DashboardMetrics, StockCharts};
pub use motorcycle::{get_motorcycle, update_motorcycle, MotorcycleDto, MotorcycleForm};
pub use stock::{stock_report, StockReport, StockRow, StockTotals};
