//! Relationship metrics between facets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetPair};

/// Qualitative band of an interaction score, strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionLabel {
    /// Strongly reinforcing.
    Synergy,
    /// Harmonious.
    Harmony,
    /// Neither reinforcing nor opposing.
    Neutral,
    /// Tense.
    Tension,
}

impl std::fmt::Display for InteractionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synergy => write!(f, "synergy"),
            Self::Harmony => write!(f, "harmony"),
            Self::Neutral => write!(f, "neutral"),
            Self::Tension => write!(f, "tension"),
        }
    }
}

/// Structural relation between two archetypes.
///
/// Checked in declaration order; the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchetypeRelation {
    /// Same archetype.
    Identical,
    /// Lines read upside down.
    Inverted,
    /// Every line flipped.
    Complementary,
    /// Consecutive ids.
    Adjacent,
    Unrelated,
}

/// Where a compatibility weight came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompatibilitySource {
    Table,
    /// No table entry; the neutral default was used.
    Fallback,
}

/// Metrics for one facet pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairInteraction {
    pub pair: FacetPair,
    /// Archetype ids of the two facets, in pair order.
    pub archetypes: (u8, u8),
    /// Cosine similarity of the normalized vectors.
    pub similarity: f64,
    pub compatibility: f64,
    pub compatibility_source: CompatibilitySource,
    pub relation: ArchetypeRelation,
    /// Weighted combination of similarity and compatibility.
    pub score: f64,
    pub label: InteractionLabel,
}

/// The most and least concentrated facets, when they are too far apart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacetImbalance {
    pub dominant: Facet,
    pub weak: Facet,
    /// Difference of their concentrations.
    pub spread: f64,
}

/// Interaction metrics across all three facets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    pub pairs: BTreeMap<FacetPair, PairInteraction>,
    /// Mean of the three pair scores.
    pub mean_score: f64,
    /// `max(0, -mean_score)`.
    #[serde(default)]
    pub conflict_level: f64,
    /// Herfindahl index of each facet's normalized vector.
    pub concentration: BTreeMap<Facet, f64>,
    #[serde(default)]
    pub imbalance: Option<FacetImbalance>,
}

impl InteractionResult {
    pub fn pair(&self, pair: FacetPair) -> Option<&PairInteraction> {
        self.pairs.get(&pair)
    }

    /// Pair with the highest score; earlier pairs win ties.
    pub fn strongest(&self) -> Option<&PairInteraction> {
        self.pairs
            .values()
            .fold(None, |best: Option<&PairInteraction>, p| match best {
                Some(b) if b.score >= p.score => Some(b),
                _ => Some(p),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(pair: FacetPair, score: f64) -> PairInteraction {
        PairInteraction {
            pair,
            archetypes: (1, 2),
            similarity: 0.0,
            compatibility: 0.0,
            compatibility_source: CompatibilitySource::Fallback,
            relation: ArchetypeRelation::Unrelated,
            score,
            label: InteractionLabel::Neutral,
        }
    }

    #[test]
    fn strongest_prefers_earlier_pair_on_tie() {
        let result = InteractionResult {
            pairs: FacetPair::ALL
                .into_iter()
                .zip([0.4, 0.4, 0.1])
                .map(|(p, s)| (p, pair(p, s)))
                .collect(),
            mean_score: 0.3,
            conflict_level: 0.0,
            concentration: BTreeMap::new(),
            imbalance: None,
        };
        assert_eq!(result.strongest().unwrap().pair, FacetPair::DriveSocial);
        assert!(result.pair(FacetPair::SocialStress).is_some());
    }

    #[test]
    fn pair_map_serializes_with_labels() {
        let mut pairs = BTreeMap::new();
        pairs.insert(FacetPair::DriveStress, pair(FacetPair::DriveStress, 0.0));
        let json = serde_json::to_string(&pairs).unwrap();
        assert!(json.starts_with(r#"{"dominant-drive/stress-response":"#));
    }
}
