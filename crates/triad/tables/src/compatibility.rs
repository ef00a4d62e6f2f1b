//! Archetype-pair compatibility weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_types::{ArchetypeRelation, TriadResult};

use crate::hexagram::{HexagramMatrix, ARCHETYPE_COUNT};

/// One unordered pair and its weight, as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub a: u8,
    pub b: u8,
    pub weight: f64,
}

/// Compatibility weights keyed by unordered archetype pair.
///
/// Serialized as a list of entries; looked up by `(min, max)`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CompatibilityEntry>", into = "Vec<CompatibilityEntry>")]
pub struct CompatibilityTable {
    index: BTreeMap<(u8, u8), f64>,
}

fn key(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

impl CompatibilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for an unordered pair, if present.
    pub fn get(&self, a: u8, b: u8) -> Option<f64> {
        self.index.get(&key(a, b)).copied()
    }

    /// Insert or replace the weight of an unordered pair.
    pub fn insert(&mut self, a: u8, b: u8, weight: f64) {
        self.index.insert(key(a, b), weight);
    }

    /// Entries ordered by pair.
    pub fn entries(&self) -> impl Iterator<Item = CompatibilityEntry> + '_ {
        self.index
            .iter()
            .map(|(&(a, b), &weight)| CompatibilityEntry { a, b, weight })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Table derived from the structural relation of every pair.
    ///
    /// `weight_of` returns `None` for relations that get no entry.
    pub fn structural<F>(matrix: &HexagramMatrix, weight_of: F) -> TriadResult<Self>
    where
        F: Fn(ArchetypeRelation) -> Option<f64>,
    {
        let mut table = Self::new();
        for a in 1..=ARCHETYPE_COUNT {
            for b in a..=ARCHETYPE_COUNT {
                if let Some(weight) = weight_of(matrix.relation(a, b)?) {
                    table.insert(a, b, weight);
                }
            }
        }
        Ok(table)
    }
}

impl From<Vec<CompatibilityEntry>> for CompatibilityTable {
    fn from(entries: Vec<CompatibilityEntry>) -> Self {
        let mut table = Self::new();
        for e in entries {
            table.insert(e.a, e.b, e.weight);
        }
        table
    }
}

impl From<CompatibilityTable> for Vec<CompatibilityEntry> {
    fn from(table: CompatibilityTable) -> Self {
        table.entries().collect()
    }
}
