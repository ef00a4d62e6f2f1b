//! Ordered trigram pair → archetype id.

use triad_tables::ConfigTables;
use triad_types::{Trigram, TriadError, TriadResult};

pub struct HexagramMapper<'t> {
    tables: &'t ConfigTables,
}

impl<'t> HexagramMapper<'t> {
    pub fn new(tables: &'t ConfigTables) -> Self {
        Self { tables }
    }

    pub fn map(&self, upper: Trigram, lower: Trigram) -> u8 {
        self.tables.hexagrams.archetype(upper, lower)
    }

    /// Lookup by category name; unknown names are fatal.
    pub fn map_names(&self, upper: &str, lower: &str) -> TriadResult<u8> {
        Ok(self.map(upper.parse()?, lower.parse()?))
    }

    pub fn name(&self, id: u8) -> TriadResult<&'t str> {
        self.tables.archetypes.name(id)
    }

    pub fn trigrams_of(&self, id: u8) -> TriadResult<(Trigram, Trigram)> {
        self.tables
            .hexagrams
            .trigrams_of(id)
            .ok_or(TriadError::UnknownArchetype(id))
    }

    /// Archetype keywords, or the keywords affine to `upper` when it has none.
    pub fn keywords(&self, id: u8, upper: Trigram) -> Vec<&'t str> {
        let own = self.tables.archetypes.keywords(id);
        if own.is_empty() {
            self.tables.keyword_affinity.keywords_for(upper)
        } else {
            own.iter().map(String::as_str).collect()
        }
    }
}
