//! Facet-dimension → trigram conversion matrices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_types::{Trigram, TriadError, TriadResult};

/// Maps each dimension of a non-canonical facet onto weighted trigrams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionMatrix {
    /// Dimension names in configured order.
    pub dimensions: Vec<String>,
    /// One row per dimension: trigram → share of the dimension's score.
    pub rows: BTreeMap<String, BTreeMap<Trigram, f64>>,
}

impl ConversionMatrix {
    /// Build from `(dimension, [(trigram, weight)])` rows, keeping row order as dimension order.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [(Trigram, f64)])>,
    {
        let mut dimensions = Vec::new();
        let mut map = BTreeMap::new();
        for (dimension, weights) in rows {
            dimensions.push(dimension.to_string());
            map.insert(dimension.to_string(), weights.iter().copied().collect());
        }
        Self {
            dimensions,
            rows: map,
        }
    }

    pub fn row(&self, dimension: &str) -> Option<&BTreeMap<Trigram, f64>> {
        self.rows.get(dimension)
    }

    pub fn has_dimension(&self, dimension: &str) -> bool {
        self.dimensions.iter().any(|d| d == dimension)
    }

    /// Trigram receiving the largest share of a dimension; canonical order breaks ties.
    pub fn dominant_target(&self, dimension: &str) -> Option<Trigram> {
        let row = self.rows.get(dimension)?;
        row.iter()
            .fold(None, |best: Option<(Trigram, f64)>, (&t, &w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((t, w)),
            })
            .map(|(t, _)| t)
    }
}

/// Canonical trigram named by a composite `<category>_<trait>` key.
///
/// The category is everything before the first `_`, or the whole key when it
/// has none; it may be a romanized name or the CJK character.
pub fn category_prefix(key: &str) -> TriadResult<Trigram> {
    let prefix = key.split('_').next().unwrap_or(key);
    Trigram::parse(prefix).ok_or_else(|| TriadError::UnknownCategory(key.to_string()))
}
