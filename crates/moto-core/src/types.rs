//! # Domain Types
//!
//! The inventory record and its enumerations.
//!
//! ## Record Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Motorcycle                                      │
//! │                                                                         │
//! │  Identity        Descriptive          Commercial        Extended (opt)  │
//! │  ─────────       ───────────          ──────────        ──────────────  │
//! │  id              name, brand, model   price_cents       chassi          │
//! │                  year, category       stock             placa           │
//! │                  engine, power        status            color           │
//! │                  weight, fuel         sales_count       patio           │
//! │                  description          image             condition       │
//! │                  features                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Superset Schema
//! Two dataset variants exist: the catalog variant has no yard/plate data,
//! the stock variant carries `chassi`, `placa`, `color`, `patio` and the
//! new/used `type`. One record type covers both; the stock-only fields are
//! `Option` and every consumer treats `None` as "no value", never as an error.
//!
//! ## Status and Stock
//! `status` and `stock` are set independently. A `Sold` record may still
//! report units, and an `Available` one may report zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

/// Lowercases and strips the accents used by the source dataset labels.
pub(crate) fn fold_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

// =============================================================================
// Category
// =============================================================================

/// Motorcycle body style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Sport,
    Naked,
    Cruiser,
    Adventure,
    Scooter,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sport,
        Category::Naked,
        Category::Cruiser,
        Category::Adventure,
        Category::Scooter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sport => "Sport",
            Category::Naked => "Naked",
            Category::Cruiser => "Cruiser",
            Category::Adventure => "Adventure",
            Category::Scooter => "Scooter",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "sport" => Ok(Category::Sport),
            "naked" => Ok(Category::Naked),
            "cruiser" => Ok(Category::Cruiser),
            "adventure" => Ok(Category::Adventure),
            "scooter" => Ok(Category::Scooter),
            _ => Err(CoreError::invalid("category", s)),
        }
    }
}

// =============================================================================
// Status
// =============================================================================

/// Commercial status of a catalog entry.
///
/// Parses from the English names and from the Portuguese labels of the
/// source dataset ("Disponível", "Vendido", "Reservado").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    #[serde(alias = "Available", alias = "Disponível")]
    Available,
    #[serde(alias = "Sold", alias = "Vendido")]
    Sold,
    #[serde(alias = "Reserved", alias = "Reservado")]
    Reserved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Available, Status::Sold, Status::Reserved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Sold => "sold",
            Status::Reserved => "reserved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "available" | "disponivel" => Ok(Status::Available),
            "sold" | "vendido" => Ok(Status::Sold),
            "reserved" | "reservado" => Ok(Status::Reserved),
            _ => Err(CoreError::invalid("status", s)),
        }
    }
}

// =============================================================================
// Condition
// =============================================================================

/// New or pre-owned unit (the stock table's "type" column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[serde(alias = "Nova")]
    New,
    #[serde(alias = "Seminova")]
    Used,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::New, Condition::Used];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "new" | "nova" => Ok(Condition::New),
            "used" | "seminova" => Ok(Condition::Used),
            _ => Err(CoreError::invalid("type", s)),
        }
    }
}

// =============================================================================
// Motorcycle
// =============================================================================

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Motorcycle {
    /// Unique, immutable identifier.
    pub id: String,

    /// Display name ("Honda CBR 600RR").
    pub name: String,

    pub brand: String,

    pub model: String,

    /// Model year. Unconstrained at the data level.
    pub year: i32,

    pub category: Category,

    pub engine: String,

    pub power: String,

    pub weight: String,

    pub fuel: String,

    pub description: String,

    /// Ordered feature list ("ABS", "Quickshifter", ...).
    pub features: Vec<String>,

    /// Unit price in minor units. Never negative.
    pub price_cents: i64,

    /// Units on hand.
    pub stock: u32,

    pub status: Status,

    /// Cumulative units sold.
    pub sales_count: u32,

    /// Opaque image reference, resolved by the front-end.
    pub image: String,

    /// Chassis number.
    #[serde(default)]
    pub chassi: Option<String>,

    /// Licence plate. New units have none.
    #[serde(default)]
    pub placa: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    /// Yard/lot where the units are parked.
    #[serde(default)]
    pub patio: Option<String>,

    /// New or used. Called `type` in the stock dataset.
    #[serde(default, rename = "type")]
    pub condition: Option<Condition>,
}

impl Motorcycle {
    /// Creates a record with the identifying fields set and everything
    /// else empty, zero or `None`. The name is `"{brand} {model}"`.
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        category: Category,
    ) -> Self {
        let brand = brand.into();
        let model = model.into();
        Motorcycle {
            id: id.into(),
            name: format!("{} {}", brand, model),
            brand,
            model,
            year: 0,
            category,
            engine: String::new(),
            power: String::new(),
            weight: String::new(),
            fuel: String::new(),
            description: String::new(),
            features: Vec::new(),
            price_cents: 0,
            stock: 0,
            status: Status::Available,
            sales_count: 0,
            image: String::new(),
            chassi: None,
            placa: None,
            color: None,
            patio: None,
            condition: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price_cents = price.cents();
        self
    }

    pub fn with_price_major(self, major: i64) -> Self {
        self.with_price(Money::from_major(major))
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_sales(mut self, sales_count: u32) -> Self {
        self.sales_count = sales_count;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_patio(mut self, patio: impl Into<String>) -> Self {
        self.patio = Some(patio.into());
        self
    }

    pub fn with_chassi(mut self, chassi: impl Into<String>) -> Self {
        self.chassi = Some(chassi.into());
        self
    }

    pub fn with_placa(mut self, placa: impl Into<String>) -> Self {
        self.placa = Some(placa.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Price × units on hand.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(i64::from(self.stock))
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// True when fewer than `threshold` units are on hand.
    #[inline]
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Fields the free-text search looks at, absent ones skipped.
    pub fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            Some(self.brand.as_str()),
            Some(self.model.as_str()),
            self.chassi.as_deref(),
            self.placa.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_english_and_portuguese() {
        assert_eq!("available".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("Disponível".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("disponivel".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("VENDIDO".parse::<Status>().unwrap(), Status::Sold);
        assert_eq!("Reservado".parse::<Status>().unwrap(), Status::Reserved);
        assert!("parked".parse::<Status>().is_err());
    }

    #[test]
    fn test_condition_parses_labels() {
        assert_eq!("Nova".parse::<Condition>().unwrap(), Condition::New);
        assert_eq!("Seminova".parse::<Condition>().unwrap(), Condition::Used);
        assert_eq!("used".parse::<Condition>().unwrap(), Condition::Used);
        assert!("broken".parse::<Condition>().is_err());
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_status_default() {
        assert_eq!(Status::default(), Status::Available);
    }

    #[test]
    fn test_stock_value() {
        let bike = Motorcycle::new("1", "Honda", "CBR 600RR", Category::Sport)
            .with_price_major(45_000)
            .with_stock(8);
        assert_eq!(bike.name, "Honda CBR 600RR");
        assert_eq!(bike.stock_value().major(), 360_000);
    }

    #[test]
    fn test_status_and_stock_are_independent() {
        let bike = Motorcycle::new("1", "Honda", "CB 650R", Category::Naked)
            .with_stock(3)
            .with_status(Status::Sold);
        assert_eq!(bike.stock, 3);
        assert!(!bike.is_available());
    }

    #[test]
    fn test_search_fields_skip_absent_identifiers() {
        let bike = Motorcycle::new("1", "Honda", "CG 160", Category::Naked).with_chassi("9C2KC");
        let fields: Vec<&str> = bike.search_fields().collect();
        assert_eq!(fields, vec!["Honda CG 160", "Honda", "CG 160", "9C2KC"]);
    }

    #[test]
    fn test_deserialize_source_labels() {
        let json = r#"{
            "id": "7", "name": "Honda CG 160", "brand": "Honda", "model": "CG 160",
            "year": 2023, "category": "Naked", "engine": "162cc", "power": "15 CV",
            "weight": "117 kg", "fuel": "Flex", "description": "Urbana",
            "features": ["CBS"], "price_cents": 1600000, "stock": 2,
            "status": "Disponível", "sales_count": 40, "image": "cg.png",
            "patio": "Matriz", "type": "Seminova"
        }"#;
        let bike: Motorcycle = serde_json::from_str(json).unwrap();
        assert_eq!(bike.status, Status::Available);
        assert_eq!(bike.condition, Some(Condition::Used));
        assert_eq!(bike.patio.as_deref(), Some("Matriz"));
        assert_eq!(bike.placa, None);
    }
}
