//! Indexed, immutable catalog over a fixed set of records.
//!
//! A [`Catalog`] is built in a single pass before a service starts
//! accepting requests and never mutated afterwards, so it can be
//! shared across request tasks without locking.

use crate::Record;
use std::collections::{BTreeMap, BTreeSet};

/// An immutable record collection with name and category indexes.
///
/// The primary index maps lowercased names to single records; if two
/// records share a normalized name, the later one in input order wins.
/// The secondary index maps every lowercased non-empty category label
/// to the records carrying it, preserving input order per bucket.
pub struct Catalog<R> {
    records: Vec<R>,
    by_name: BTreeMap<String, usize>,
    by_category: BTreeMap<String, Vec<usize>>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            by_name: BTreeMap::new(),
            by_category: BTreeMap::new(),
        }
    }
}

impl<R: Record> Catalog<R> {
    /// Build a catalog from records, indexing them in input order.
    pub fn new(records: Vec<R>) -> Self {
        let mut by_name = BTreeMap::new();
        let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            // Last record under a normalized name wins.
            by_name.insert(record.name().to_lowercase(), idx);

            for label in record.categories() {
                by_category
                    .entry(label.to_lowercase())
                    .or_default()
                    .push(idx);
            }
        }

        Self {
            records,
            by_name,
            by_category,
        }
    }

    /// Point lookup by case-insensitive name.
    ///
    /// Absence is a normal outcome, not an error.
    pub fn get(&self, name: &str) -> Option<&R> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.records[idx])
    }

    /// All records under a case-insensitive category label.
    ///
    /// Exact-key match through the secondary index, O(1) in dataset
    /// size. Unknown labels yield an empty vec, never an error.
    pub fn by_category(&self, key: &str) -> Vec<&R> {
        self.by_category
            .get(&key.to_lowercase())
            .map(|indices| indices.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring scan over every record's haystack.
    ///
    /// O(n) per query and bypasses the indexes entirely; this is the
    /// matching semantic of the shows deployment.
    pub fn search(&self, term: &str) -> Vec<&R> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record
                    .haystack()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Sorted, deduplicated names of all records.
    pub fn names(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.records.iter().map(Record::name).collect();
        unique.into_iter().map(str::to_owned).collect()
    }

    /// Sorted, deduplicated category labels across all records.
    pub fn categories(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(Record::categories)
            .collect();
        unique.into_iter().map(str::to_owned).collect()
    }

    /// Number of records, counting duplicates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in input order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of distinct normalized category keys in the index.
    pub fn category_keys(&self) -> usize {
        self.by_category.len()
    }
}
