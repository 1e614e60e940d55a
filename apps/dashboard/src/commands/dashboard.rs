//! # Dashboard Commands
//!
//! The landing page: metric cards, seller strips and stock charts.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐            │
//! │ │ Valor total│ │ Em estoque │ │ Disponíveis│ │ Vendas     │            │
//! │ └────────────┘ └────────────┘ └────────────┘ └────────────┘            │
//! │                                                                         │
//! │  Mais vendidas (top N)          Menos vendidas (bottom N)              │
//! │                                                                         │
//! │  [bar] estoque por modelo       [pie] estoque por pátio                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;
use moto_core::stats::{self, GroupTotal, ModelStock};

use super::motorcycle::MotorcycleDto;

/// Metric cards and seller strips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_value_cents: i64,
    pub total_value_display: String,
    pub total_stock: u64,
    pub available_stock: u64,
    pub total_sales: u64,
    pub model_count: usize,
    pub brand_count: usize,
    pub low_stock_count: usize,
    pub best_selling: Vec<MotorcycleDto>,
    pub worst_selling: Vec<MotorcycleDto>,
    /// Store revision the numbers were computed at.
    pub revision: u64,
}

/// Computes the landing page numbers.
///
/// Seller strip length and the low-stock threshold come from configuration.
pub fn dashboard_metrics(state: &AppState) -> DashboardMetrics {
    let config = state.config();
    let repo = state.motorcycles();
    debug!(revision = repo.revision(), "dashboard_metrics command");

    let summary = repo.summary(config.summary_options());

    DashboardMetrics {
        total_value_cents: summary.total_value.cents(),
        total_value_display: config.format_money(summary.total_value),
        total_stock: summary.total_stock,
        available_stock: summary.available_stock,
        total_sales: summary.total_sales,
        model_count: summary.model_count,
        brand_count: summary.brand_count,
        low_stock_count: summary.low_stock_count,
        best_selling: summary.best_selling.into_iter().map(MotorcycleDto::from).collect(),
        worst_selling: summary.worst_selling.into_iter().map(MotorcycleDto::from).collect(),
        revision: repo.revision(),
    }
}

/// Chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCharts {
    pub by_model: Vec<ModelStock>,
    pub by_patio: Vec<GroupTotal>,
    pub by_status: Vec<GroupTotal>,
}

pub fn stock_charts(state: &AppState) -> StockCharts {
    debug!("stock_charts command");
    let records = state.motorcycles().all();
    StockCharts {
        by_model: stats::stock_by_model(records),
        by_patio: stats::count_by_patio(records),
        by_status: stats::count_by_status(records),
    }
}
