//! The 8×8 trigram-pair lookup matrix and the archetype catalog.

use serde::{Deserialize, Serialize};
use triad_types::{ArchetypeRelation, Trigram, TriadError, TriadResult};

/// Number of archetypes.
pub const ARCHETYPE_COUNT: u8 = 64;

/// Archetype ids indexed by `[upper][lower]` in canonical trigram order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramMatrix {
    pub cells: [[u8; 8]; 8],
}

impl HexagramMatrix {
    pub fn new(cells: [[u8; 8]; 8]) -> Self {
        Self { cells }
    }

    /// Archetype id for an ordered pair.
    pub fn archetype(&self, upper: Trigram, lower: Trigram) -> u8 {
        self.cells[upper.index()][lower.index()]
    }

    /// Reverse lookup: `(upper, lower)` for an archetype id.
    pub fn trigrams_of(&self, id: u8) -> Option<(Trigram, Trigram)> {
        for upper in Trigram::ALL {
            for lower in Trigram::ALL {
                if self.archetype(upper, lower) == id {
                    return Some((upper, lower));
                }
            }
        }
        None
    }

    /// Whether every id 1..=64 appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ARCHETYPE_COUNT as usize];
        for id in self.cells.iter().flatten().copied() {
            if id == 0 || id > ARCHETYPE_COUNT || seen[usize::from(id - 1)] {
                return false;
            }
            seen[usize::from(id - 1)] = true;
        }
        true
    }

    /// The archetype read upside down.
    pub fn inverted(&self, id: u8) -> TriadResult<u8> {
        let (upper, lower) = self
            .trigrams_of(id)
            .ok_or(TriadError::UnknownArchetype(id))?;
        Ok(self.archetype(lower.reversed(), upper.reversed()))
    }

    /// The archetype with every line flipped.
    pub fn complementary(&self, id: u8) -> TriadResult<u8> {
        let (upper, lower) = self
            .trigrams_of(id)
            .ok_or(TriadError::UnknownArchetype(id))?;
        Ok(self.archetype(upper.complement(), lower.complement()))
    }

    /// Structural relation between two archetypes.
    pub fn relation(&self, a: u8, b: u8) -> TriadResult<ArchetypeRelation> {
        if a == b {
            self.trigrams_of(a).ok_or(TriadError::UnknownArchetype(a))?;
            return Ok(ArchetypeRelation::Identical);
        }
        if self.inverted(a)? == b {
            return Ok(ArchetypeRelation::Inverted);
        }
        if self.complementary(a)? == b {
            return Ok(ArchetypeRelation::Complementary);
        }
        self.trigrams_of(b).ok_or(TriadError::UnknownArchetype(b))?;
        if a.abs_diff(b) == 1 {
            return Ok(ArchetypeRelation::Adjacent);
        }
        Ok(ArchetypeRelation::Unrelated)
    }
}

/// Name and keywords of one archetype.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    pub id: u8,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ArchetypeEntry {
    pub fn new(id: u8, name: &str, keywords: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// All archetype entries, indexed by id.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeCatalog {
    pub entries: Vec<ArchetypeEntry>,
}

impl ArchetypeCatalog {
    pub fn new(entries: Vec<ArchetypeEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: u8) -> Option<&ArchetypeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn name(&self, id: u8) -> TriadResult<&str> {
        self.get(id)
            .map(|e| e.name.as_str())
            .ok_or(TriadError::UnknownArchetype(id))
    }

    /// Keywords of an archetype; empty when the id is unknown or has none.
    pub fn keywords(&self, id: u8) -> &[String] {
        self.get(id).map(|e| e.keywords.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
