//! Per-facet profile types: selection policy, orientation, and the resolved profile.

use serde::{Deserialize, Serialize};

use crate::facet::Facet;
use crate::trigram::Trigram;
use crate::vector::CanonicalVector;

/// Margin used by [`SelectionPolicy::default`].
pub const DEFAULT_DOMINANCE_MARGIN: f64 = 0.5;

/// How the two dominant categories of a facet are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Always the two highest distinct categories; profiles are never pure.
    DistinctPair,
    /// Pure when the top category leads the runner-up by more than `margin`.
    DominanceThreshold { margin: f64 },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::DominanceThreshold {
            margin: DEFAULT_DOMINANCE_MARGIN,
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DistinctPair => write!(f, "distinct-pair"),
            Self::DominanceThreshold { margin } => write!(f, "dominance-threshold({margin})"),
        }
    }
}

/// How the upper/lower ordering of a profile was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationSource {
    /// Upper and lower are the same category.
    Pure,
    /// The pair has a fixed ordering in the tables.
    Table,
    /// Evidence was tied; the top-ranked category stays upper.
    Ranked,
    /// Evidence favoured one ordering.
    Evidence,
}

/// One evaluated ordering of an ambiguous pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationCandidate {
    pub upper: Trigram,
    pub lower: Trigram,
    pub archetype_id: u8,
    /// Fraction of archetype keywords found in the evidence context.
    pub keyword_score: f64,
    /// Normalized category affinity of the two trigrams.
    pub affinity_score: f64,
    /// Weighted combination of the two scores.
    pub total_score: f64,
}

/// The resolved profile of one facet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacetProfile {
    pub facet: Facet,
    /// Canonical vector before normalization.
    pub raw_vector: CanonicalVector,
    /// Normalized distribution (non-negative, sums to 1).
    pub canonical_vector: CanonicalVector,
    pub upper: Trigram,
    pub lower: Trigram,
    pub is_pure: bool,
    /// Archetype id in 1..=64.
    pub archetype_id: u8,
    pub archetype_name: String,
    pub orientation: OrientationSource,
}

impl FacetProfile {
    /// `(upper, lower)` as a pair.
    pub fn trigrams(&self) -> (Trigram, Trigram) {
        (self.upper, self.lower)
    }
}
