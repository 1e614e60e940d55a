//! # Motorcycle Commands
//!
//! Detail view and edit form.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_motorcycle("2") ──► form pre-filled                               │
//! │       │                                                                 │
//! │       ▼  user edits, submits                                            │
//! │  update_motorcycle("2", MotorcycleForm)                                │
//! │       │                                                                 │
//! │       │  parse category / status / type  ── bad label → VALIDATION    │
//! │       │  merge: form fields replace, absent extended fields kept       │
//! │       ▼                                                                 │
//! │  repository.replace_by_id("2", record)   ── unknown id → NOT_FOUND    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MotorcycleDto of the stored record                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use moto_core::{Category, Condition, Motorcycle, Status};

/// Motorcycle DTO for the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleDto {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: Category,
    pub engine: String,
    pub power: String,
    pub weight: String,
    pub fuel: String,
    pub description: String,
    pub features: Vec<String>,
    pub price_cents: i64,
    pub stock: u32,
    pub status: Status,
    pub sales_count: u32,
    pub image: String,
    pub chassi: Option<String>,
    pub placa: Option<String>,
    pub color: Option<String>,
    pub patio: Option<String>,
    #[serde(rename = "type")]
    pub condition: Option<Condition>,
}

impl From<Motorcycle> for MotorcycleDto {
    fn from(m: Motorcycle) -> Self {
        MotorcycleDto {
            id: m.id,
            name: m.name,
            brand: m.brand,
            model: m.model,
            year: m.year,
            category: m.category,
            engine: m.engine,
            power: m.power,
            weight: m.weight,
            fuel: m.fuel,
            description: m.description,
            features: m.features,
            price_cents: m.price_cents,
            stock: m.stock,
            status: m.status,
            sales_count: m.sales_count,
            image: m.image,
            chassi: m.chassi,
            placa: m.placa,
            color: m.color,
            patio: m.patio,
            condition: m.condition,
        }
    }
}

impl From<&Motorcycle> for MotorcycleDto {
    fn from(m: &Motorcycle) -> Self {
        MotorcycleDto::from(m.clone())
    }
}

/// Edit form payload.
///
/// Category, status and type arrive as the labels the form shows and are
/// parsed here. Extended fields left out of the payload keep their stored
/// values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleForm {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    pub engine: String,
    pub power: String,
    pub weight: String,
    pub fuel: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub price_cents: i64,
    pub stock: u32,
    pub status: String,
    pub sales_count: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub chassi: Option<String>,
    #[serde(default)]
    pub placa: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub patio: Option<String>,
    #[serde(default, rename = "type")]
    pub condition: Option<String>,
}

impl MotorcycleForm {
    /// Pre-fills a form from a stored record.
    pub fn from_record(m: &Motorcycle) -> Self {
        MotorcycleForm {
            name: m.name.clone(),
            brand: m.brand.clone(),
            model: m.model.clone(),
            year: m.year,
            category: m.category.to_string(),
            engine: m.engine.clone(),
            power: m.power.clone(),
            weight: m.weight.clone(),
            fuel: m.fuel.clone(),
            description: m.description.clone(),
            features: m.features.clone(),
            price_cents: m.price_cents,
            stock: m.stock,
            status: m.status.to_string(),
            sales_count: m.sales_count,
            image: m.image.clone(),
            chassi: m.chassi.clone(),
            placa: m.placa.clone(),
            color: m.color.clone(),
            patio: m.patio.clone(),
            condition: m.condition.map(|c| c.to_string()),
        }
    }

    /// Builds the replacement record on top of `current`.
    pub fn apply_to(self, current: &Motorcycle) -> Result<Motorcycle, ApiError> {
        let category: Category = self.category.parse()?;
        let status: Status = self.status.parse()?;
        let condition = match self.condition {
            Some(raw) => Some(raw.parse::<Condition>()?),
            None => current.condition,
        };

        Ok(Motorcycle {
            id: current.id.clone(),
            name: self.name,
            brand: self.brand,
            model: self.model,
            year: self.year,
            category,
            engine: self.engine,
            power: self.power,
            weight: self.weight,
            fuel: self.fuel,
            description: self.description,
            features: self.features,
            price_cents: self.price_cents,
            stock: self.stock,
            status,
            sales_count: self.sales_count,
            image: self.image,
            chassi: self.chassi.or_else(|| current.chassi.clone()),
            placa: self.placa.or_else(|| current.placa.clone()),
            color: self.color.or_else(|| current.color.clone()),
            patio: self.patio.or_else(|| current.patio.clone()),
            condition,
        })
    }
}

/// Gets a single motorcycle by id.
///
/// ## Returns
/// The record, or `NOT_FOUND`.
pub fn get_motorcycle(state: &AppState, id: &str) -> Result<MotorcycleDto, ApiError> {
    debug!(id = %id, "get_motorcycle command");
    let bike = state.motorcycles().require(id)?;
    Ok(MotorcycleDto::from(bike))
}

/// Replaces the motorcycle with `id` using the edit form.
///
/// ## Returns
/// * The stored record after replacement
/// * `NOT_FOUND` when no record has `id`
/// * `VALIDATION_ERROR` for unknown category/status/type labels or a
///   negative price
pub fn update_motorcycle(
    state: &mut AppState,
    id: &str,
    form: MotorcycleForm,
) -> Result<MotorcycleDto, ApiError> {
    debug!(id = %id, "update_motorcycle command");

    let current = state.motorcycles().require(id)?;
    let record = form.apply_to(current)?;

    let repo = state.motorcycles_mut();
    repo.replace_by_id(id, record)?;
    info!(id = %id, revision = repo.revision(), "update_motorcycle complete");

    get_motorcycle(state, id)
}
