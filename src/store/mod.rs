//! The name-keyed contact directory.

use crate::models::ContactRecord;
use std::collections::HashMap;
use tracing::debug;

/// An in-memory directory of [`ContactRecord`]s, keyed by contact name.
///
/// Keys are unique; adding a record under an existing name replaces the
/// previous record. Insertion order is preserved for listing, which a plain
/// `HashMap` alone would not give us, so the store keeps a side vector of
/// names alongside the map.
///
/// The store lives for the duration of the process only; there is no
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    ///
    /// If a record with the same name already exists it is replaced, and
    /// the entry keeps its original position in insertion order. Callers
    /// that want "already exists" semantics must check [`Self::contains`]
    /// first.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name.clone());
        }
        debug!(contact = %name, "record stored");
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the record with this name.
    ///
    /// Returns `true` if a record was removed; removing an absent name is
    /// a no-op, not an error.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_some() {
            self.order.retain(|n| n != name);
            debug!(contact = %name, "record deleted");
            true
        } else {
            false
        }
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
