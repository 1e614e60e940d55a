//! # Catalog Commands
//!
//! The filtered, sorted motorcycle grid and its drop-down options.
//!
//! ## Filter Bar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ 🔍 "honda"  [Marca: all ▾] [Categoria: Naked ▾] [Status: all ▾]        │
//! │             [Ordenar: price-asc ▾]                                     │
//! │                                                                         │
//! │ Mostrando 1 de 6 motos                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Drop-downs send their raw value; `"all"` or blank means no constraint.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use moto_core::query::{parse_filter, parse_text_filter, Criteria, SortKey};
use moto_core::stats::{self, Facets};

use super::motorcycle::MotorcycleDto;

/// Filter bar state as sent by the front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInput {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub condition: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub patio: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FilterInput {
    /// Parses the raw values into criteria.
    ///
    /// ## Returns
    /// `VALIDATION_ERROR` when a drop-down value names no known option.
    pub fn criteria(&self) -> Result<Criteria, ApiError> {
        let text = |raw: &Option<String>| raw.as_deref().and_then(parse_text_filter);

        Ok(Criteria {
            search: self.search.clone().unwrap_or_default(),
            brand: text(&self.brand),
            category: parse_optional(&self.category)?,
            condition: parse_optional(&self.condition)?,
            status: parse_optional(&self.status)?,
            color: text(&self.color),
            patio: text(&self.patio),
        })
    }

    /// Sort key, `Name` when absent.
    pub fn sort_key(&self) -> Result<SortKey, ApiError> {
        match self.sort.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(SortKey::default()),
        }
    }
}

fn parse_optional<T>(raw: &Option<String>) -> Result<Option<T>, ApiError>
where
    T: std::str::FromStr<Err = moto_core::CoreError>,
{
    match raw.as_deref() {
        Some(value) => Ok(parse_filter(value)?),
        None => Ok(None),
    }
}

/// One page of the catalog grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub items: Vec<MotorcycleDto>,
    /// Records matching the filters.
    pub shown: usize,
    /// Records in the collection.
    pub total: usize,
    /// Drives the "clear filters" button. A non-default sort counts.
    pub has_active_filters: bool,
    pub sort: SortKey,
}

/// Runs the catalog pipeline: filter, then sort.
///
/// ## Returns
/// Matching records in sort order plus the "showing N of M" counts.
pub fn list_catalog(state: &AppState, filters: FilterInput) -> Result<CatalogPage, ApiError> {
    let start = Instant::now();
    let criteria = filters.criteria()?;
    let sort = filters.sort_key()?;

    debug!(?criteria, sort = %sort, "list_catalog command");

    let repo = state.motorcycles();
    let items: Vec<MotorcycleDto> = repo
        .search(&criteria, sort)
        .into_iter()
        .map(MotorcycleDto::from)
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        shown = items.len(),
        total = repo.count(),
        "list_catalog complete"
    );

    Ok(CatalogPage {
        shown: items.len(),
        total: repo.count(),
        has_active_filters: !criteria.is_unconstrained() || sort != SortKey::Name,
        sort,
        items,
    })
}

/// Distinct values for every filter drop-down.
pub fn catalog_facets(state: &AppState) -> Facets {
    debug!("catalog_facets command");
    stats::facets(state.motorcycles().all())
}
