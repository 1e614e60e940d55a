//! # Dashboard Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MOTO_DATASET_PATH=/srv/moto/stock.json                             │
//! │     MOTO_BEST_SELLING_LIMIT=5                                          │
//! │     MOTO_LOW_STOCK_THRESHOLD=3                                         │
//! │     MOTO_CURRENCY_CODE=BRL                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/motostock/dashboard.toml (Linux)                         │
//! │     ~/Library/Application Support/com.motostock.dashboard/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     built-in dataset, top 3 sellers, low stock below 5, BRL            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dashboard.toml
//! dataset_path = "/srv/moto/stock.json"
//! best_selling_limit = 3
//! low_stock_threshold = 5
//! currency_code = "BRL"
//! currency_symbol = "R$"
//! ```
//!
//! ## Thread Safety
//! Read-only after load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use moto_core::stats::SummaryOptions;
use moto_core::{Money, DEFAULT_BEST_SELLING_LIMIT, DEFAULT_LOW_STOCK_THRESHOLD};

/// Configuration load failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Config read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but break a constraint.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON dataset to seed from. `None` uses the built-in catalog.
    pub dataset_path: Option<PathBuf>,

    /// Length of the best/worst seller strips.
    pub best_selling_limit: usize,

    /// Stock rows below this many units are flagged.
    pub low_stock_threshold: u32,

    /// ISO 4217 code, display only.
    pub currency_code: String,

    pub currency_symbol: String,
}

impl Default for DashboardConfig {
    /// ## Default Values
    /// - Dataset: built-in catalog
    /// - Best sellers: top 3
    /// - Low stock: fewer than 5 units
    /// - Currency: BRL (R$)
    fn default() -> Self {
        DashboardConfig {
            dataset_path: None,
            best_selling_limit: DEFAULT_BEST_SELLING_LIMIT,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency_code: "BRL".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (dashboard.toml); a missing file is not an error
    /// 3. Environment variables
    /// 4. Validation
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.best_selling_limit == 0 {
            return Err(ConfigError::Invalid(
                "best_selling_limit must be greater than 0".into(),
            ));
        }

        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::Invalid(format!(
                "currency_code must be a 3-letter ISO 4217 code, got: {}",
                self.currency_code
            )));
        }

        Ok(())
    }

    /// Applies `MOTO_*` overrides read through `lookup`.
    ///
    /// Unparsable numbers are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("MOTO_DATASET_PATH") {
            debug!(path = %path, "Overriding dataset path from environment");
            self.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(limit) = lookup("MOTO_BEST_SELLING_LIMIT") {
            match limit.trim().parse::<usize>() {
                Ok(n) => self.best_selling_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring unparsable MOTO_BEST_SELLING_LIMIT"),
            }
        }

        if let Some(threshold) = lookup("MOTO_LOW_STOCK_THRESHOLD") {
            match threshold.trim().parse::<u32>() {
                Ok(n) => self.low_stock_threshold = n,
                Err(_) => warn!(value = %threshold, "Ignoring unparsable MOTO_LOW_STOCK_THRESHOLD"),
            }
        }

        if let Some(code) = lookup("MOTO_CURRENCY_CODE") {
            self.currency_code = code.trim().to_uppercase();
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "motostock", "dashboard")
            .map(|dirs| dirs.config_dir().join("dashboard.toml"))
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            ranking_limit: self.best_selling_limit,
            low_stock_threshold: self.low_stock_threshold,
        }
    }

    /// Formats money with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use moto_core::Money;
    /// use moto_dashboard::state::DashboardConfig;
    ///
    /// let config = DashboardConfig::default();
    /// assert_eq!(config.format_money(Money::from_major(45_000)), "R$ 45000.00");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        if amount.is_negative() {
            format!("-{} {}", self.currency_symbol, Money::from_cents(amount.cents().saturating_neg()))
        } else {
            format!("{} {}", self.currency_symbol, amount)
        }
    }
}
