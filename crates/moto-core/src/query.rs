//! # Query Module
//!
//! Filter criteria, sort keys, and the catalog pipeline.
//!
//! ## Catalog Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Query Flow                               │
//! │                                                                         │
//! │  &[Motorcycle] (canonical collection, never reordered)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter(criteria) ── conjunction of every supplied criterion           │
//! │       │              input order preserved                              │
//! │       ▼                                                                 │
//! │  Vec<&Motorcycle>                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sort(key) ──────── stable, returns a NEW vector                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Motorcycle> rendered by the grid / table                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes `&[M]` where `M: Borrow<Motorcycle>`, so the same
//! code runs over the owned collection and over an earlier filter result.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{fold_label, Category, Condition, Motorcycle, Status};
use crate::ALL_SENTINEL;

/// Parses a drop-down value into an optional constraint.
///
/// `"all"` (any case) and blank strings mean "no constraint".
///
/// ```rust
/// use moto_core::query::parse_filter;
/// use moto_core::Status;
///
/// assert_eq!(parse_filter::<Status>("all").unwrap(), None);
/// assert_eq!(parse_filter::<Status>("Reservado").unwrap(), Some(Status::Reserved));
/// assert!(parse_filter::<Status>("parked").is_err());
/// ```
pub fn parse_filter<T>(raw: &str) -> CoreResult<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// Like [`parse_filter`] for free-text valued fields (brand, color, patio).
pub fn parse_text_filter(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(raw.to_string())
    }
}

// =============================================================================
// Criteria
// =============================================================================

/// Independently-optional match constraints. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criteria {
    /// Case-insensitive substring over name, brand, model, chassi, placa.
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub condition: Option<Condition>,

    #[serde(default)]
    pub status: Option<Status>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub patio: Option<String>,
}

impl Criteria {
    /// Criteria with every field unconstrained.
    pub fn all() -> Self {
        Criteria::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
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

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search.trim().is_empty()
            && self.brand.is_none()
            && self.category.is_none()
            && self.condition.is_none()
            && self.status.is_none()
            && self.color.is_none()
            && self.patio.is_none()
    }

    /// Checks a single record against every supplied criterion.
    pub fn matches(&self, bike: &Motorcycle) -> bool {
        let term = self.search.trim().to_lowercase();
        self.matches_with_term(bike, &term)
    }

    fn matches_with_term(&self, bike: &Motorcycle, term: &str) -> bool {
        matches_search(bike, term)
            && self.brand.as_ref().map_or(true, |b| bike.brand == *b)
            && self.category.map_or(true, |c| bike.category == c)
            && self.condition.map_or(true, |c| bike.condition == Some(c))
            && self.status.map_or(true, |s| bike.status == s)
            && self.color.as_ref().map_or(true, |c| bike.color.as_ref() == Some(c))
            && self.patio.as_ref().map_or(true, |p| bike.patio.as_ref() == Some(p))
    }
}

/// `term` must already be lowercased. Empty matches everything.
fn matches_search(bike: &Motorcycle, term: &str) -> bool {
    term.is_empty()
        || bike
            .search_fields()
            .any(|field| field.to_lowercase().contains(term))
}

// =============================================================================
// Sort Key
// =============================================================================

/// Catalog ordering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name A-Z.
    #[default]
    Name,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most units on hand first.
    #[serde(rename = "stock")]
    StockDesc,
    /// Most sold first.
    #[serde(rename = "sales")]
    SalesDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::StockDesc => "stock",
            SortKey::SalesDesc => "sales",
        }
    }

    /// Comparator for this key. Ties compare `Equal`; the stable sort keeps
    /// their input order.
    pub fn compare(&self, a: &Motorcycle, b: &Motorcycle) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceAsc => a.price_cents.cmp(&b.price_cents),
            SortKey::PriceDesc => b.price_cents.cmp(&a.price_cents),
            SortKey::StockDesc => b.stock.cmp(&a.stock),
            SortKey::SalesDesc => b.sales_count.cmp(&a.sales_count),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "name" => Ok(SortKey::Name),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "stock" | "stock-desc" => Ok(SortKey::StockDesc),
            "sales" | "sales-desc" => Ok(SortKey::SalesDesc),
            _ => Err(CoreError::invalid("sort", s)),
        }
    }
}

/// Accent- and case-insensitive name ordering, so "Ápia" files under A.
///
/// Names equal after folding fall back to their lowercased form. Names that
/// differ only in case compare `Equal` so the stable sort keeps their
/// catalog order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_label(a).cmp(&fold_label(b)).then_with(|| {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
    })
}

// =============================================================================
// Operations
// =============================================================================

/// Returns the records matching every supplied criterion, in input order.
pub fn filter<'a, M>(records: &'a [M], criteria: &Criteria) -> Vec<&'a Motorcycle>
where
    M: Borrow<Motorcycle>,
{
    let term = criteria.search.trim().to_lowercase();
    records
        .iter()
        .map(<M as Borrow<Motorcycle>>::borrow)
        .filter(|bike| criteria.matches_with_term(bike, &term))
        .collect()
}

/// Returns a new, stably sorted vector. `records` is left untouched.
pub fn sort<'a, M>(records: &'a [M], key: SortKey) -> Vec<&'a Motorcycle>
where
    M: Borrow<Motorcycle>,
{
    let mut sorted: Vec<&Motorcycle> = records.iter().map(<M as Borrow<Motorcycle>>::borrow).collect();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Filter then sort: the catalog grid.
pub fn query<'a, M>(records: &'a [M], criteria: &Criteria, key: SortKey) -> Vec<&'a Motorcycle>
where
    M: Borrow<Motorcycle>,
{
    let mut matched = filter(records, criteria);
    matched.sort_by(|a, b| key.compare(a, b));
    matched
}

/// Looks a record up by id.
pub fn find_by_id<'a, M>(records: &'a [M], id: &str) -> Option<&'a Motorcycle>
where
    M: Borrow<Motorcycle>,
{
    records.iter().map(<M as Borrow<Motorcycle>>::borrow).find(|bike| bike.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Motorcycle> {
        vec![
            Motorcycle::new("1", "Honda", "CBR 600RR", Category::Sport)
                .with_price_major(45_000)
                .with_stock(8)
                .with_sales(24)
                .with_chassi("9C2PC4010PR000001")
                .with_color("Vermelha")
                .with_patio("Matriz")
                .with_condition(Condition::New),
            Motorcycle::new("2", "Yamaha", "MT-07", Category::Naked)
                .with_price_major(38_000)
                .with_stock(12)
                .with_sales(18)
                .with_chassi("9C6RM0710PR000002")
                .with_placa("ABC1D23")
                .with_color("Azul")
                .with_patio("Filial")
                .with_condition(Condition::Used),
            Motorcycle::new("3", "BMW", "S1000RR", Category::Sport)
                .with_price_major(85_000)
                .with_stock(3)
                .with_sales(12)
                .with_status(Status::Reserved),
        ]
    }

    fn ids(records: &[&Motorcycle]) -> Vec<String> {
        records.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_unconstrained_criteria_return_everything() {
        let records = catalog();
        let result = filter(&records, &Criteria::all());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        assert!(Criteria::all().is_unconstrained());
    }

    #[test]
    fn test_brand_filter() {
        let records = catalog();
        let result = filter(&records, &Criteria::all().with_brand("Honda"));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_brand_model() {
        let records = catalog();
        assert_eq!(ids(&filter(&records, &Criteria::all().with_search("yAmA"))), vec!["2"]);
        assert_eq!(ids(&filter(&records, &Criteria::all().with_search("rr"))), vec!["1", "3"]);
        assert_eq!(ids(&filter(&records, &Criteria::all().with_search("  "))).len(), 3);
    }

    #[test]
    fn test_search_covers_chassi_and_placa() {
        let records = catalog();
        assert_eq!(ids(&filter(&records, &Criteria::all().with_search("abc1d"))), vec!["2"]);
        assert_eq!(ids(&filter(&records, &Criteria::all().with_search("pr000001"))), vec!["1"]);
    }

    #[test]
    fn test_absent_optional_fields_never_match() {
        let records = catalog();
        // Only record 2 has a plate; records without one must not match.
        let result = filter(&records, &Criteria::all().with_search("ABC1D23"));
        assert_eq!(ids(&result), vec!["2"]);

        // Record 3 has no patio at all.
        let result = filter(&records, &Criteria::all().with_patio("Matriz"));
        assert_eq!(ids(&result), vec!["1"]);

        let result = filter(&records, &Criteria::all().with_condition(Condition::Used));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_criteria_are_a_conjunction() {
        let records = catalog();
        let criteria = Criteria::all()
            .with_category(Category::Sport)
            .with_status(Status::Available);
        assert_eq!(ids(&filter(&records, &criteria)), vec!["1"]);

        let criteria = Criteria::all().with_brand("Honda").with_color("Azul");
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_sort_does_not_touch_source() {
        let records = catalog();
        let sorted = sort(&records, SortKey::PriceDesc);
        assert_eq!(ids(&sorted), vec!["3", "1", "2"]);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[2].id, "3");
    }

    #[test]
    fn test_sort_keys() {
        let records = catalog();
        assert_eq!(ids(&sort(&records, SortKey::Name)), vec!["3", "1", "2"]);
        assert_eq!(ids(&sort(&records, SortKey::PriceAsc)), vec!["2", "1", "3"]);
        assert_eq!(ids(&sort(&records, SortKey::StockDesc)), vec!["2", "1", "3"]);
        assert_eq!(ids(&sort(&records, SortKey::SalesDesc)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = vec![
            Motorcycle::new("a", "Honda", "X", Category::Naked).with_price_major(10),
            Motorcycle::new("b", "Honda", "Y", Category::Naked).with_price_major(10),
            Motorcycle::new("c", "Honda", "Z", Category::Naked).with_price_major(5),
        ];
        assert_eq!(ids(&sort(&records, SortKey::PriceAsc)), vec!["c", "a", "b"]);
        assert_eq!(ids(&sort(&records, SortKey::PriceDesc)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_empty() {
        let records: Vec<Motorcycle> = Vec::new();
        assert!(sort(&records, SortKey::SalesDesc).is_empty());
        assert!(query(&records, &Criteria::all(), SortKey::Name).is_empty());
    }

    #[test]
    fn test_name_compare_ignores_case() {
        assert_eq!(compare_names("bmw", "BMW"), Ordering::Equal);
        assert_eq!(compare_names("ducati", "Honda"), Ordering::Less);
        assert_eq!(compare_names("Yamaha", "kawasaki"), Ordering::Greater);
    }

    #[test]
    fn test_name_sort_files_accented_initials_with_their_letter() {
        let records = vec![
            Motorcycle::new("1", "Benelli", "TRK", Category::Adventure),
            Motorcycle::new("2", "Ápia", "X", Category::Scooter),
            Motorcycle::new("3", "Apia", "X", Category::Scooter),
        ];
        assert_eq!(ids(&sort(&records, SortKey::Name)), vec!["3", "2", "1"]);
        assert_eq!(compare_names("Ébano", "Ducati"), Ordering::Greater);
        assert_eq!(compare_names("Ébano", "Fantic"), Ordering::Less);
    }

    #[test]
    fn test_query_filters_then_sorts() {
        let records = catalog();
        let result = query(&records, &Criteria::all().with_category(Category::Sport), SortKey::PriceAsc);
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_parse_filter_values() {
        assert_eq!(parse_filter::<Category>("ALL").unwrap(), None);
        assert_eq!(parse_filter::<Category>("").unwrap(), None);
        assert_eq!(parse_filter::<Category>("naked").unwrap(), Some(Category::Naked));
        assert!(parse_filter::<Category>("chopper").is_err());

        assert_eq!(parse_text_filter("all"), None);
        assert_eq!(parse_text_filter(" Honda "), Some("Honda".to_string()));
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("price-desc".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("stock".parse::<SortKey>().unwrap(), SortKey::StockDesc);
        assert_eq!("sales".parse::<SortKey>().unwrap(), SortKey::SalesDesc);
        assert!("random".parse::<SortKey>().is_err());
        for key in [SortKey::Name, SortKey::PriceAsc, SortKey::PriceDesc, SortKey::StockDesc, SortKey::SalesDesc] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_find_by_id() {
        let records = catalog();
        assert_eq!(find_by_id(&records, "2").map(|m| m.model.as_str()), Some("MT-07"));
        assert!(find_by_id(&records, "999").is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const BRANDS: [&str; 3] = ["Honda", "Yamaha", "BMW"];

        fn arb_motorcycle() -> impl Strategy<Value = Motorcycle> {
            (
                0usize..3,
                0usize..5,
                0usize..3,
                0i64..100_000,
                0u32..50,
                0u32..100,
                proptest::option::of(prop_oneof![Just("Matriz"), Just("Filial")]),
            )
                .prop_map(|(brand, category, status, price, stock, sales, patio)| {
                    let mut bike = Motorcycle::new("x", BRANDS[brand], "Model", Category::ALL[category])
                        .with_price_major(price)
                        .with_stock(stock)
                        .with_sales(sales)
                        .with_status(Status::ALL[status]);
                    bike.patio = patio.map(str::to_string);
                    bike
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<Motorcycle>> {
            proptest::collection::vec(arb_motorcycle(), 0..30).prop_map(|mut bikes| {
                for (i, bike) in bikes.iter_mut().enumerate() {
                    bike.id = i.to_string();
                }
                bikes
            })
        }

        fn arb_criteria() -> impl Strategy<Value = Criteria> {
            (
                proptest::option::of(0usize..3),
                proptest::option::of(0usize..5),
                proptest::option::of(0usize..3),
                proptest::option::of(prop_oneof![Just("Matriz"), Just("Filial")]),
                prop_oneof![Just(""), Just("a"), Just("model")],
            )
                .prop_map(|(brand, category, status, patio, search)| Criteria {
                    search: search.to_string(),
                    brand: brand.map(|b| BRANDS[b].to_string()),
                    category: category.map(|c| Category::ALL[c]),
                    status: status.map(|s| Status::ALL[s]),
                    patio: patio.map(str::to_string),
                    ..Criteria::default()
                })
        }

        proptest! {
            /// Property: Filter keeps exactly the records satisfying every predicate.
            #[test]
            fn filter_is_exact_conjunction(records in arb_catalog(), criteria in arb_criteria()) {
                let result = filter(&records, &criteria);
                let expected: Vec<&Motorcycle> = records.iter().filter(|m| criteria.matches(m)).collect();
                prop_assert_eq!(result, expected);
            }

            /// Property: Filtering a filter result changes nothing.
            #[test]
            fn filter_is_idempotent(records in arb_catalog(), criteria in arb_criteria()) {
                let once = filter(&records, &criteria);
                let twice = filter(&once, &criteria);
                prop_assert_eq!(&once, &twice);
            }

            /// Property: Unconstrained criteria keep every record.
            #[test]
            fn unconstrained_filter_keeps_all(records in arb_catalog()) {
                prop_assert_eq!(filter(&records, &Criteria::all()).len(), records.len());
            }

            /// Property: Sorting neither adds nor drops records.
            #[test]
            fn sort_is_a_permutation(records in arb_catalog()) {
                let mut sorted_ids: Vec<String> = sort(&records, SortKey::SalesDesc)
                    .into_iter()
                    .map(|m| m.id.clone())
                    .collect();
                let mut source_ids: Vec<String> = records.iter().map(|m| m.id.clone()).collect();
                sorted_ids.sort();
                source_ids.sort();
                prop_assert_eq!(sorted_ids, source_ids);
            }

            /// Property: With distinct prices, ascending is the reverse of descending.
            #[test]
            fn price_orders_are_mirror_images(prices in proptest::collection::hash_set(0i64..1_000_000, 0..20)) {
                let records: Vec<Motorcycle> = prices
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| Motorcycle::new(i.to_string(), "Honda", "X", Category::Naked).with_price_major(p))
                    .collect();
                let asc = sort(&records, SortKey::PriceAsc);
                let mut desc = sort(&records, SortKey::PriceDesc);
                desc.reverse();
                prop_assert_eq!(asc, desc);
            }
        }
    }
}
