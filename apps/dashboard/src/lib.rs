//! # Moto Stock Dashboard Library
//!
//! Application layer for the dealership dashboard: configuration, state and
//! the commands the front-end calls.
//!
//! ## Module Organization
//! ```text
//! moto_dashboard/
//! ├── lib.rs          ◄─── You are here (logging, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (repository + config)
//! │   └── config.rs   ◄─── DashboardConfig, ConfigError
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── dashboard.rs◄─── Metric cards, charts
//! │   ├── catalog.rs  ◄─── Catalog grid, facets
//! │   ├── stock.rs    ◄─── Stock table
//! │   └── motorcycle.rs ◄─ Detail, edit
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{AppState, DashboardConfig};

/// Loads configuration and seeds the state.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → dashboard.toml → MOTO_* environment                    │
/// │     • validated; a bad file is an error, a missing one is not           │
/// │                                                                         │
/// │  2. Seed Repository ──────────────────────────────────────────────────► │
/// │     • dataset_path set: JSON file (ids unique, prices ≥ 0)              │
/// │     • otherwise: built-in six-model catalog                             │
/// │                                                                         │
/// │  3. Build AppState ───────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap(config_path: Option<PathBuf>) -> Result<AppState, ApiError> {
    let config = DashboardConfig::load(config_path)?;
    info!(
        best_selling_limit = config.best_selling_limit,
        low_stock_threshold = config.low_stock_threshold,
        currency = %config.currency_code,
        "Configuration loaded"
    );

    let state = AppState::from_config(config)?;
    info!(count = state.motorcycles().count(), "State initialized");
    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=moto_store=trace` - Trace for one crate only
/// - Default: INFO, DEBUG for the moto crates
///
/// Logs go to stderr so JSON on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,moto_core=debug,moto_store=debug,moto_dashboard=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
