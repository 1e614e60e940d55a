//! # Stock Commands
//!
//! The stock control table.
//!
//! ## Reserved Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Status filter        Rows shown                                       │
//! │  ─────────────        ──────────                                       │
//! │  all (none)           everything except Reserved                       │
//! │  Reserved             only Reserved                                    │
//! │  Available / Sold     only that status                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The table lists units free to sell, so reserved ones only appear when
//! asked for explicitly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use moto_core::query;
use moto_core::stats;
use moto_core::{Condition, Motorcycle, Status};

use super::catalog::FilterInput;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub chassi: Option<String>,
    pub placa: Option<String>,
    pub color: Option<String>,
    pub patio: Option<String>,
    #[serde(rename = "type")]
    pub condition: Option<Condition>,
    pub status: Status,
    pub stock: u32,
    pub price_cents: i64,
    pub price_display: String,
    /// Highlighted in red by the table.
    pub low_stock: bool,
}

/// Cards above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTotals {
    pub units: u64,
    pub value_cents: i64,
    pub value_display: String,
    pub new_units: u64,
    pub used_units: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub rows: Vec<StockRow>,
    pub totals: StockTotals,
}

/// Builds the stock table for the given filters.
///
/// ## Returns
/// Rows in sort order and totals over exactly those rows.
pub fn stock_report(state: &AppState, filters: FilterInput) -> Result<StockReport, ApiError> {
    let criteria = filters.criteria()?;
    let sort = filters.sort_key()?;
    let config = state.config();

    debug!(?criteria, sort = %sort, "stock_report command");

    let hide_reserved = criteria.status.is_none();
    let visible: Vec<&Motorcycle> = query::query(state.motorcycles().all(), &criteria, sort)
        .into_iter()
        .filter(|m| !(hide_reserved && m.status == Status::Reserved))
        .collect();

    let value = stats::total_value(&visible);
    let split = stats::stock_by_condition(&visible);
    let totals = StockTotals {
        units: stats::total_stock(&visible),
        value_cents: value.cents(),
        value_display: config.format_money(value),
        new_units: split.new_units,
        used_units: split.used_units,
    };

    let rows = visible
        .into_iter()
        .map(|m| StockRow {
            id: m.id.clone(),
            name: m.name.clone(),
            brand: m.brand.clone(),
            model: m.model.clone(),
            year: m.year,
            chassi: m.chassi.clone(),
            placa: m.placa.clone(),
            color: m.color.clone(),
            patio: m.patio.clone(),
            condition: m.condition,
            status: m.status,
            stock: m.stock,
            price_cents: m.price_cents,
            price_display: config.format_money(m.price()),
            low_stock: m.is_low_stock(config.low_stock_threshold),
        })
        .collect();

    Ok(StockReport { rows, totals })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(report: &StockReport) -> Vec<&str> {
        report.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_reserved_hidden_without_status_filter() {
        let state = AppState::default();
        let report = stock_report(&state, FilterInput::default()).unwrap();
        assert!(!ids(&report).contains(&"4"));
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.totals.units, 37);
    }

    #[test]
    fn test_reserved_shown_when_selected() {
        let state = AppState::default();
        let filters = FilterInput {
            status: Some("Reservado".into()),
            ..Default::default()
        };
        let report = stock_report(&state, filters).unwrap();
        assert_eq!(ids(&report), vec!["4"]);
        assert_eq!(report.totals.value_cents, 25_500_000);
    }

    #[test]
    fn test_totals_split_new_and_used() {
        let state = AppState::default();
        let report = stock_report(&state, FilterInput::default()).unwrap();
        // Used: Yamaha (12) + Ducati (4). New: Honda x2 (8 + 7) + Kawasaki (6).
        assert_eq!(report.totals.used_units, 16);
        assert_eq!(report.totals.new_units, 21);
        assert_eq!(report.totals.value_display, "R$ 1624000.00");
    }

    #[test]
    fn test_low_stock_flag() {
        let state = AppState::default();
        let report = stock_report(&state, FilterInput::default()).unwrap();
        let flagged: Vec<&str> = report
            .rows
            .iter()
            .filter(|r| r.low_stock)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["5"]);
    }

    #[test]
    fn test_patio_filter() {
        let state = AppState::default();
        let filters = FilterInput {
            patio: Some("Matriz".into()),
            sort: Some("stock".into()),
            ..Default::default()
        };
        let report = stock_report(&state, filters).unwrap();
        assert_eq!(ids(&report), vec!["1", "6", "3"]);
    }
}
