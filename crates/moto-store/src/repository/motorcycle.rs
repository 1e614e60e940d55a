//! # Motorcycle Repository
//!
//! The single owner of the record collection.
//!
//! ## Key Operations
//! - Seeding with id uniqueness and price checks
//! - Lookup by id
//! - Catalog query (delegates to `moto_core::query`)
//! - Replace-by-id, the only mutation
//!
//! ## Revision Counter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  seeded        revision 0                                              │
//! │  replace "1"   revision 1                                              │
//! │  replace "9"   NotFound, revision stays 1                              │
//! │  replace "2"   revision 2                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Views cache derived data against the revision they were computed at.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::seed;
use moto_core::query::{self, Criteria, SortKey};
use moto_core::stats::{self, InventorySummary, SummaryOptions};
use moto_core::Motorcycle;

const ENTITY: &str = "Motorcycle";

/// Repository over the in-memory catalog.
///
/// ## Usage
/// ```rust
/// use moto_core::query::{Criteria, SortKey};
/// use moto_store::MotorcycleRepository;
///
/// let repo = MotorcycleRepository::seeded();
/// let hondas = repo.search(&Criteria::all().with_brand("Honda"), SortKey::Name);
/// assert_eq!(hondas.len(), 2);
/// assert!(repo.get_by_id("999").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MotorcycleRepository {
    records: Vec<Motorcycle>,
    revision: u64,
}

impl MotorcycleRepository {
    /// Creates a repository from seed records.
    ///
    /// ## Returns
    /// * `Err(StoreError::DuplicateId)` - Two records share an id
    /// * `Err(StoreError::InvalidRecord)` - A record has a negative price
    pub fn new(records: Vec<Motorcycle>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for bike in &records {
            if !seen.insert(bike.id.as_str()) {
                return Err(StoreError::DuplicateId(bike.id.clone()));
            }
            check_record(bike)?;
        }

        info!(count = records.len(), "Seeded motorcycle collection");
        Ok(MotorcycleRepository {
            records,
            revision: 0,
        })
    }

    /// Repository over the built-in dataset.
    pub fn seeded() -> Self {
        let records = seed::motorcycles();
        info!(count = records.len(), "Seeded built-in motorcycle collection");
        MotorcycleRepository {
            records,
            revision: 0,
        }
    }

    /// Seeds from a JSON array of records.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<Motorcycle> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Seeds from a JSON dataset file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading motorcycle dataset");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The canonical collection in seed order.
    pub fn all(&self) -> &[Motorcycle] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Number of successful replacements since seeding.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Gets a record by id.
    ///
    /// ## Returns
    /// * `Some(&Motorcycle)` - Record found
    /// * `None` - No record has this id
    pub fn get_by_id(&self, id: &str) -> Option<&Motorcycle> {
        query::find_by_id(&self.records, id)
    }

    /// Like [`get_by_id`](Self::get_by_id), but a miss is an error.
    pub fn require(&self, id: &str) -> StoreResult<&Motorcycle> {
        self.get_by_id(id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Filter then sort, as owned copies.
    pub fn search(&self, criteria: &Criteria, key: SortKey) -> Vec<Motorcycle> {
        let matched = query::query(&self.records, criteria, key);
        debug!(
            matched = matched.len(),
            total = self.records.len(),
            sort = %key,
            "Searched motorcycles"
        );
        matched.into_iter().cloned().collect()
    }

    /// Aggregates over the whole collection.
    pub fn summary(&self, options: SummaryOptions) -> InventorySummary {
        stats::aggregate(&self.records, options)
    }

    /// Replaces every field of the record with `id`.
    ///
    /// The stored id never changes: an id carried by `record` is ignored.
    ///
    /// ## Returns
    /// * `Ok(())` - Replaced, revision bumped
    /// * `Err(StoreError::NotFound)` - No record has this id
    /// * `Err(StoreError::InvalidRecord)` - Replacement has a negative price
    pub fn replace_by_id(&mut self, id: &str, record: Motorcycle) -> StoreResult<()> {
        check_record(&record)?;

        let slot = self
            .records
            .iter_mut()
            .find(|bike| bike.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        if record.id != id {
            debug!(id = %id, ignored = %record.id, "Replacement carried a different id");
        }

        *slot = Motorcycle {
            id: slot.id.clone(),
            ..record
        };
        self.revision += 1;

        info!(id = %id, revision = self.revision, "Replaced motorcycle");
        Ok(())
    }
}

fn check_record(bike: &Motorcycle) -> StoreResult<()> {
    if bike.price_cents < 0 {
        return Err(StoreError::invalid(&bike.id, "price must not be negative"));
    }
    Ok(())
}
