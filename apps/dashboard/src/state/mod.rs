//! # State Module
//!
//! The application state every command runs against.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │   MotorcycleRepository       │  │   DashboardConfig            │    │
//! │  │                              │  │                              │    │
//! │  │  canonical collection        │  │  best_selling_limit          │    │
//! │  │  revision counter            │  │  low_stock_threshold         │    │
//! │  │  replace_by_id (only write)  │  │  currency                    │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                 └───────────────┬───────────────┘                       │
//! │                                 ▼                                       │
//! │                             AppState                                    │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • Read commands take &AppState                                        │
//! │  • update_motorcycle takes &mut AppState                               │
//! │  • Single-threaded; no locks                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, ConfigResult, DashboardConfig};

use tracing::info;

use moto_store::{MotorcycleRepository, StoreResult};

/// Repository plus configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    motorcycles: MotorcycleRepository,
    config: DashboardConfig,
}

impl AppState {
    pub fn new(motorcycles: MotorcycleRepository, config: DashboardConfig) -> Self {
        AppState {
            motorcycles,
            config,
        }
    }

    /// Seeds the repository the configuration asks for.
    ///
    /// `dataset_path` set: load that JSON file. Otherwise the built-in catalog.
    pub fn from_config(config: DashboardConfig) -> StoreResult<Self> {
        let motorcycles = match &config.dataset_path {
            Some(path) => {
                info!(path = %path.display(), "Seeding from dataset file");
                MotorcycleRepository::from_json_file(path)?
            }
            None => MotorcycleRepository::seeded(),
        };
        Ok(AppState::new(motorcycles, config))
    }

    pub fn motorcycles(&self) -> &MotorcycleRepository {
        &self.motorcycles
    }

    pub fn motorcycles_mut(&mut self) -> &mut MotorcycleRepository {
        &mut self.motorcycles
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl Default for AppState {
    /// Built-in catalog with default configuration.
    fn default() -> Self {
        AppState::new(MotorcycleRepository::seeded(), DashboardConfig::default())
    }
}
