//! FILENAME: core/ledger/src/row.rs
//! PURPOSE: Map-shaped ledger rows.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::value::LedgerValue;

/// Read access to the cells of one row, keyed by column name.
///
/// Row sources that already hold their rows in a map can hand them to the
/// builder directly instead of converting to [`RowRecord`].
pub trait RowAccess {
    fn cell(&self, key: &str) -> Option<&LedgerValue>;
}

impl<T: RowAccess + ?Sized> RowAccess for &T {
    fn cell(&self, key: &str) -> Option<&LedgerValue> {
        (**self).cell(key)
    }
}

impl<S: BuildHasher> RowAccess for HashMap<String, LedgerValue, S> {
    fn cell(&self, key: &str) -> Option<&LedgerValue> {
        self.get(key)
    }
}

/// One parsed ledger row. Deserializes from a flat JSON object; cells holding
/// arrays or objects read as [`LedgerValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord {
    cells: FxHashMap<String, LedgerValue>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used mostly by tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<LedgerValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<LedgerValue>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl RowAccess for RowRecord {
    fn cell(&self, key: &str) -> Option<&LedgerValue> {
        self.cells.get(key)
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<LedgerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RowRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
