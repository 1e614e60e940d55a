//! # Stats Module
//!
//! Aggregates behind the dashboard cards, charts and stock table.
//!
//! ## Where Each Number Shows Up
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Aggregates                               │
//! │                                                                         │
//! │  Metric cards    total_value, total_stock, available_stock,            │
//! │                  total_sales, model_count                               │
//! │                                                                         │
//! │  Best sellers    best_selling(n)  ── sorted COPY, source untouched     │
//! │  Slow movers     worst_selling(n) ── sorted COPY, source untouched     │
//! │                                                                         │
//! │  Stock chart     stock_by_model (total + available per model)          │
//! │                  count_by_patio (pie)                                   │
//! │                                                                         │
//! │  Stock table     stock_by_condition (new / used units)                 │
//! │                                                                         │
//! │  Drop-downs      facets (distinct sorted values)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Grouping
//! Grouped sums add `stock` per distinct key, in first-seen order. Records
//! with no value for the key are bucketed under [`UNASSIGNED_GROUP`], so the
//! group sums always add up to [`total_stock`].

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::money::Money;
use crate::query::{self, SortKey};
use crate::types::{Category, Condition, Motorcycle, Status};
use crate::{DEFAULT_BEST_SELLING_LIMIT, DEFAULT_LOW_STOCK_THRESHOLD, UNASSIGNED_GROUP};

fn records_iter<M: Borrow<Motorcycle>>(records: &[M]) -> impl Iterator<Item = &Motorcycle> {
    records.iter().map(<M as Borrow<Motorcycle>>::borrow)
}

// =============================================================================
// Scalar Aggregates
// =============================================================================

/// Σ price × stock. No rounding.
pub fn total_value<M: Borrow<Motorcycle>>(records: &[M]) -> Money {
    records_iter(records).map(Motorcycle::stock_value).sum()
}

/// Σ stock.
pub fn total_stock<M: Borrow<Motorcycle>>(records: &[M]) -> u64 {
    records_iter(records).map(|m| u64::from(m.stock)).sum()
}

/// Σ stock over records whose status is `Available`.
pub fn available_stock<M: Borrow<Motorcycle>>(records: &[M]) -> u64 {
    records_iter(records)
        .filter(|m| m.is_available())
        .map(|m| u64::from(m.stock))
        .sum()
}

/// Σ sales_count.
pub fn total_sales<M: Borrow<Motorcycle>>(records: &[M]) -> u64 {
    records_iter(records).map(|m| u64::from(m.sales_count)).sum()
}

/// Number of records with fewer than `threshold` units on hand.
pub fn low_stock_count<M: Borrow<Motorcycle>>(records: &[M], threshold: u32) -> usize {
    records_iter(records)
        .filter(|m| m.is_low_stock(threshold))
        .count()
}

/// Number of distinct brands.
pub fn brand_count<M: Borrow<Motorcycle>>(records: &[M]) -> usize {
    records_iter(records)
        .map(|m| m.brand.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

// =============================================================================
// Rankings
// =============================================================================

/// Top `n` by sales_count, most sold first. Ties keep input order.
pub fn best_selling<M: Borrow<Motorcycle>>(records: &[M], n: usize) -> Vec<&Motorcycle> {
    let mut ranked = query::sort(records, SortKey::SalesDesc);
    ranked.truncate(n);
    ranked
}

/// Bottom `n` by sales_count, least sold first. Ties keep input order.
pub fn worst_selling<M: Borrow<Motorcycle>>(records: &[M], n: usize) -> Vec<&Motorcycle> {
    let mut ranked: Vec<&Motorcycle> = records_iter(records).collect();
    ranked.sort_by_key(|m| m.sales_count);
    ranked.truncate(n);
    ranked
}

// =============================================================================
// Grouped Sums
// =============================================================================

/// Σ stock for one group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupTotal {
    pub key: String,
    pub stock: u64,
}

/// Groups Σ stock by `key_of`, first-seen order, `None` keys bucketed
/// under [`UNASSIGNED_GROUP`].
pub fn group_stock<'a, M, F>(records: &'a [M], key_of: F) -> Vec<GroupTotal>
where
    M: Borrow<Motorcycle>,
    F: Fn(&'a Motorcycle) -> Option<&'a str>,
{
    let mut groups: Vec<GroupTotal> = Vec::new();
    for bike in records_iter(records) {
        let key = key_of(bike).unwrap_or(UNASSIGNED_GROUP);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.stock += u64::from(bike.stock),
            None => groups.push(GroupTotal {
                key: key.to_string(),
                stock: u64::from(bike.stock),
            }),
        }
    }
    groups
}

/// Σ stock per yard/lot.
pub fn count_by_patio<M: Borrow<Motorcycle>>(records: &[M]) -> Vec<GroupTotal> {
    group_stock(records, |m| m.patio.as_deref())
}

/// Σ stock per status.
pub fn count_by_status<M: Borrow<Motorcycle>>(records: &[M]) -> Vec<GroupTotal> {
    group_stock(records, |m| Some(m.status.as_str()))
}

/// Stock chart bar: all units of a model, and the available ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelStock {
    pub model: String,
    pub total: u64,
    pub available: u64,
}

/// Per-model totals, first-seen order.
pub fn stock_by_model<M: Borrow<Motorcycle>>(records: &[M]) -> Vec<ModelStock> {
    let mut models: Vec<ModelStock> = Vec::new();
    for bike in records_iter(records) {
        let available = if bike.is_available() { u64::from(bike.stock) } else { 0 };
        match models.iter_mut().find(|m| m.model == bike.model) {
            Some(entry) => {
                entry.total += u64::from(bike.stock);
                entry.available += available;
            }
            None => models.push(ModelStock {
                model: bike.model.clone(),
                total: u64::from(bike.stock),
                available,
            }),
        }
    }
    models
}

/// New vs. used units. Records without a condition count in neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionStock {
    pub new_units: u64,
    pub used_units: u64,
}

pub fn stock_by_condition<M: Borrow<Motorcycle>>(records: &[M]) -> ConditionStock {
    records_iter(records).fold(ConditionStock::default(), |mut acc, bike| {
        match bike.condition {
            Some(Condition::New) => acc.new_units += u64::from(bike.stock),
            Some(Condition::Used) => acc.used_units += u64::from(bike.stock),
            None => {}
        }
        acc
    })
}

// =============================================================================
// Facets
// =============================================================================

/// Distinct, sorted values for the filter drop-downs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Facets {
    pub brands: Vec<String>,
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
    pub conditions: Vec<Condition>,
    pub colors: Vec<String>,
    pub patios: Vec<String>,
}

/// Collects facets. Absent optional fields contribute nothing.
pub fn facets<M: Borrow<Motorcycle>>(records: &[M]) -> Facets {
    let mut brands = BTreeSet::new();
    let mut colors = BTreeSet::new();
    let mut patios = BTreeSet::new();
    let mut categories: Vec<Category> = Vec::new();
    let mut statuses: Vec<Status> = Vec::new();
    let mut conditions: Vec<Condition> = Vec::new();

    for bike in records_iter(records) {
        brands.insert(bike.brand.clone());
        if let Some(color) = &bike.color {
            colors.insert(color.clone());
        }
        if let Some(patio) = &bike.patio {
            patios.insert(patio.clone());
        }
        if !categories.contains(&bike.category) {
            categories.push(bike.category);
        }
        if !statuses.contains(&bike.status) {
            statuses.push(bike.status);
        }
        if let Some(condition) = bike.condition {
            if !conditions.contains(&condition) {
                conditions.push(condition);
            }
        }
    }

    categories.sort_by_key(|c| c.as_str());
    statuses.sort_by_key(|s| s.as_str());
    conditions.sort_by_key(|c| c.as_str());

    Facets {
        brands: brands.into_iter().collect(),
        categories,
        statuses,
        conditions,
        colors: colors.into_iter().collect(),
        patios: patios.into_iter().collect(),
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Tunables for [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// How many records the best/worst selling lists keep.
    pub ranking_limit: usize,
    pub low_stock_threshold: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            ranking_limit: DEFAULT_BEST_SELLING_LIMIT,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Every aggregate over one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySummary {
    pub total_value: Money,
    pub total_stock: u64,
    pub available_stock: u64,
    pub total_sales: u64,
    pub model_count: usize,
    pub brand_count: usize,
    pub low_stock_count: usize,
    pub best_selling: Vec<Motorcycle>,
    pub worst_selling: Vec<Motorcycle>,
    pub count_by_patio: Vec<GroupTotal>,
    pub count_by_status: Vec<GroupTotal>,
}

/// Computes the full summary. The rankings are derived from independent
/// copies, so neither sees the other's ordering.
pub fn aggregate<M: Borrow<Motorcycle>>(records: &[M], options: SummaryOptions) -> InventorySummary {
    InventorySummary {
        total_value: total_value(records),
        total_stock: total_stock(records),
        available_stock: available_stock(records),
        total_sales: total_sales(records),
        model_count: records.len(),
        brand_count: brand_count(records),
        low_stock_count: low_stock_count(records, options.low_stock_threshold),
        best_selling: best_selling(records, options.ranking_limit)
            .into_iter()
            .cloned()
            .collect(),
        worst_selling: worst_selling(records, options.ranking_limit)
            .into_iter()
            .cloned()
            .collect(),
        count_by_patio: count_by_patio(records),
        count_by_status: count_by_status(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bikes() -> Vec<Motorcycle> {
        vec![
            Motorcycle::new("1", "Honda", "CBR 600RR", Category::Sport)
                .with_price_major(45_000)
                .with_stock(8)
                .with_sales(24),
            Motorcycle::new("2", "Yamaha", "MT-07", Category::Naked)
                .with_price_major(38_000)
                .with_stock(12)
                .with_sales(18),
        ]
    }

    fn yard() -> Vec<Motorcycle> {
        vec![
            Motorcycle::new("1", "Honda", "CG 160", Category::Naked)
                .with_stock(4)
                .with_sales(30)
                .with_patio("Matriz")
                .with_color("Preta")
                .with_condition(Condition::New),
            Motorcycle::new("2", "Honda", "CG 160", Category::Naked)
                .with_stock(2)
                .with_sales(5)
                .with_status(Status::Reserved)
                .with_patio("Filial")
                .with_color("Vermelha")
                .with_condition(Condition::Used),
            Motorcycle::new("3", "Yamaha", "Fazer 250", Category::Naked)
                .with_stock(6)
                .with_sales(5)
                .with_patio("Matriz")
                .with_condition(Condition::New),
            Motorcycle::new("4", "BMW", "G 310 GS", Category::Adventure)
                .with_stock(1)
                .with_sales(2)
                .with_status(Status::Sold),
        ]
    }

    #[test]
    fn test_literal_scenario() {
        let records = two_bikes();
        let summary = aggregate(&records, SummaryOptions { ranking_limit: 1, ..Default::default() });
        assert_eq!(summary.total_value, Money::from_major(816_000));
        assert_eq!(summary.total_stock, 20);
        assert_eq!(summary.available_stock, 20);
        assert_eq!(summary.best_selling.len(), 1);
        assert_eq!(summary.best_selling[0].id, "1");
        assert_eq!(summary.worst_selling[0].id, "2");
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<Motorcycle> = Vec::new();
        let summary = aggregate(&records, SummaryOptions::default());
        assert_eq!(summary.total_stock, 0);
        assert!(summary.total_value.is_zero());
        assert!(summary.best_selling.is_empty());
        assert!(summary.count_by_patio.is_empty());
        assert_eq!(summary.model_count, 0);
    }

    #[test]
    fn test_available_stock_ignores_other_statuses() {
        let records = yard();
        assert_eq!(total_stock(&records), 13);
        assert_eq!(available_stock(&records), 10);
    }

    #[test]
    fn test_rankings_are_independent() {
        let records = yard();
        let best = best_selling(&records, 2);
        let worst = worst_selling(&records, 2);

        assert_eq!(best.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(worst.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["4", "2"]);

        // Source order is untouched by either ranking.
        assert_eq!(
            records.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_ranking_limit_larger_than_collection() {
        let records = two_bikes();
        assert_eq!(best_selling(&records, 10).len(), 2);
        assert!(worst_selling(&records, 0).is_empty());
    }

    #[test]
    fn test_count_by_patio_buckets_unassigned() {
        let records = yard();
        let groups = count_by_patio(&records);
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "Matriz".into(), stock: 10 },
                GroupTotal { key: "Filial".into(), stock: 2 },
                GroupTotal { key: UNASSIGNED_GROUP.into(), stock: 1 },
            ]
        );
    }

    #[test]
    fn test_count_by_status_first_seen_order() {
        let records = yard();
        let groups = count_by_status(&records);
        assert_eq!(
            groups,
            vec![
                GroupTotal { key: "available".into(), stock: 10 },
                GroupTotal { key: "reserved".into(), stock: 2 },
                GroupTotal { key: "sold".into(), stock: 1 },
            ]
        );
    }

    #[test]
    fn test_stock_by_model() {
        let records = yard();
        let models = stock_by_model(&records);
        assert_eq!(models.len(), 3);
        assert_eq!(models[0], ModelStock { model: "CG 160".into(), total: 6, available: 4 });
        assert_eq!(models[2], ModelStock { model: "G 310 GS".into(), total: 1, available: 0 });
    }

    #[test]
    fn test_stock_by_condition() {
        let records = yard();
        let split = stock_by_condition(&records);
        assert_eq!(split, ConditionStock { new_units: 10, used_units: 2 });
    }

    #[test]
    fn test_dashboard_counters() {
        let records = yard();
        assert_eq!(total_sales(&records), 42);
        assert_eq!(brand_count(&records), 3);
        assert_eq!(low_stock_count(&records, 5), 3);
    }

    #[test]
    fn test_facets_are_sorted_and_distinct() {
        let records = yard();
        let facets = facets(&records);
        assert_eq!(facets.brands, vec!["BMW", "Honda", "Yamaha"]);
        assert_eq!(facets.categories, vec![Category::Adventure, Category::Naked]);
        assert_eq!(facets.statuses, vec![Status::Available, Status::Reserved, Status::Sold]);
        assert_eq!(facets.conditions, vec![Condition::New, Condition::Used]);
        assert_eq!(facets.colors, vec!["Preta", "Vermelha"]);
        assert_eq!(facets.patios, vec!["Filial", "Matriz"]);
    }

    #[test]
    fn test_aggregates_over_filter_result() {
        let records = yard();
        let matriz = query::filter(&records, &query::Criteria::all().with_patio("Matriz"));
        assert_eq!(total_stock(&matriz), 10);
        assert_eq!(count_by_patio(&matriz).len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Vec<Motorcycle>> {
            proptest::collection::vec(
                (
                    0u32..40,
                    0u32..200,
                    0usize..3,
                    proptest::option::of(prop_oneof![Just("Matriz"), Just("Filial"), Just("Centro")]),
                ),
                0..25,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (stock, sales, status, patio))| {
                        let mut bike = Motorcycle::new(i.to_string(), "Honda", "X", Category::Naked)
                            .with_stock(stock)
                            .with_sales(sales)
                            .with_status(Status::ALL[status]);
                        bike.patio = patio.map(str::to_string);
                        bike
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: total_stock is the plain sum of stock.
            #[test]
            fn total_stock_is_sum(records in arb_catalog()) {
                let expected: u64 = records.iter().map(|m| u64::from(m.stock)).sum();
                prop_assert_eq!(total_stock(&records), expected);
            }

            /// Property: Grouped sums partition the total.
            #[test]
            fn groups_partition_total_stock(records in arb_catalog()) {
                let total = total_stock(&records);
                let by_patio: u64 = count_by_patio(&records).iter().map(|g| g.stock).sum();
                let by_status: u64 = count_by_status(&records).iter().map(|g| g.stock).sum();
                prop_assert_eq!(by_patio, total);
                prop_assert_eq!(by_status, total);
            }

            /// Property: Best sellers are non-increasing in sales and never exceed n.
            #[test]
            fn best_selling_is_ordered(records in arb_catalog(), n in 0usize..10) {
                let best = best_selling(&records, n);
                prop_assert!(best.len() <= n);
                prop_assert!(best.windows(2).all(|w| w[0].sales_count >= w[1].sales_count));
            }
        }
    }
}
