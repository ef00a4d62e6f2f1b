//! Category affinity and keyword affinity tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_types::{Facet, Trigram};

/// Per-facet affinity of each trigram, with the bounds used to normalize it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryAffinity {
    pub min: f64,
    pub max: f64,
    pub weights: BTreeMap<Facet, BTreeMap<Trigram, f64>>,
}

impl CategoryAffinity {
    /// Configured affinity, or `min` when the facet/trigram has no entry.
    pub fn weight(&self, facet: Facet, trigram: Trigram) -> f64 {
        self.weights
            .get(&facet)
            .and_then(|row| row.get(&trigram))
            .copied()
            .unwrap_or(self.min)
    }

    /// Mean affinity of the two trigrams scaled into `[0, 1]`.
    ///
    /// Returns 0.5 when the bounds coincide.
    pub fn normalized_pair(&self, facet: Facet, upper: Trigram, lower: Trigram) -> f64 {
        let span = self.max - self.min;
        if span.abs() <= f64::EPSILON {
            return 0.5;
        }
        let mean = (self.weight(facet, upper) + self.weight(facet, lower)) / 2.0;
        ((mean - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Keyword → trigrams the keyword is affine to.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordAffinity {
    pub keywords: BTreeMap<String, Vec<Trigram>>,
}

impl KeywordAffinity {
    pub fn new(keywords: BTreeMap<String, Vec<Trigram>>) -> Self {
        Self { keywords }
    }

    /// Keywords affine to a trigram, in keyword order.
    pub fn keywords_for(&self, trigram: Trigram) -> Vec<&str> {
        self.keywords
            .iter()
            .filter(|(_, trigrams)| trigrams.contains(&trigram))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Trigrams a keyword is affine to; empty for unknown keywords.
    pub fn categories_for(&self, keyword: &str) -> &[Trigram] {
        self.keywords
            .get(&keyword.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
