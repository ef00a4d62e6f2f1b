//! Rewrites facet-basis vectors into the canonical trigram basis.

use tracing::debug;
use triad_tables::{category_prefix, ConfigTables};
use triad_types::{CanonicalVector, DimensionVector, TriadError, TriadResult};

/// Applies the conversion matrices (or the dominant-drive rename).
pub struct DimensionUnifier<'t> {
    tables: &'t ConfigTables,
}

impl<'t> DimensionUnifier<'t> {
    pub fn new(tables: &'t ConfigTables) -> Self {
        Self { tables }
    }

    /// Canonical, unnormalized vector for a raw facet vector.
    pub fn unify(&self, raw: &DimensionVector) -> TriadResult<CanonicalVector> {
        let unified = match self.tables.conversion_for(raw.facet) {
            None => Self::rename(raw)?,
            Some(matrix) => {
                let mut out = CanonicalVector::zeros();
                for (dimension, score) in raw.iter().filter(|(_, s)| *s != 0.0) {
                    let row = matrix
                        .row(dimension)
                        .ok_or_else(|| TriadError::UnknownCategory(dimension.to_string()))?;
                    for (trigram, weight) in row {
                        out.add(*trigram, score * weight);
                    }
                }
                out
            }
        };
        debug!(facet = %raw.facet, sum = unified.sum(), "unified into canonical basis");
        Ok(unified)
    }

    /// Dominant-drive keys carry their trigram as a prefix; no redistribution.
    fn rename(raw: &DimensionVector) -> TriadResult<CanonicalVector> {
        let mut out = CanonicalVector::zeros();
        for (key, score) in raw.iter() {
            out.add(category_prefix(key)?, score);
        }
        Ok(out)
    }
}
