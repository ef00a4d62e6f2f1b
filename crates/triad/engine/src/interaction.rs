//! Pairwise relationship metrics between the three facet profiles.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use triad_tables::ConfigTables;
use triad_types::{
    CompatibilitySource, Facet, FacetImbalance, FacetPair, FacetProfile, InteractionResult,
    PairInteraction, TriadResult,
};

use crate::config::InteractionConfig;

pub struct InteractionAnalyzer<'t> {
    tables: &'t ConfigTables,
    config: InteractionConfig,
}

impl<'t> InteractionAnalyzer<'t> {
    pub fn new(tables: &'t ConfigTables, config: InteractionConfig) -> Self {
        Self { tables, config }
    }

    /// Metrics for every facet pair; `profiles` are in `Facet::ALL` order.
    pub fn analyze(&self, profiles: &[FacetProfile; 3]) -> TriadResult<InteractionResult> {
        let mut pairs = BTreeMap::new();
        for pair in FacetPair::ALL {
            let (a, b) = pair.facets();
            let interaction = self.analyze_pair(pair, &profiles[a.index()], &profiles[b.index()])?;
            pairs.insert(pair, interaction);
        }

        let mean_score = pairs.values().map(|p| p.score).sum::<f64>() / pairs.len() as f64;
        let concentration: BTreeMap<Facet, f64> = profiles
            .iter()
            .map(|p| (p.facet, p.canonical_vector.herfindahl()))
            .collect();
        let imbalance = self.imbalance(&concentration);
        if let Some(i) = &imbalance {
            debug!(dominant = %i.dominant, weak = %i.weak, spread = i.spread, "facet imbalance");
        }

        Ok(InteractionResult {
            pairs,
            mean_score,
            conflict_level: (-mean_score).max(0.0),
            concentration,
            imbalance,
        })
    }

    /// Flags the most and least concentrated facets when their spread exceeds the threshold.
    ///
    /// Ties resolve to the facet earliest in `Facet::ALL`.
    pub fn imbalance(&self, concentration: &BTreeMap<Facet, f64>) -> Option<FacetImbalance> {
        let mut entries = concentration.iter().map(|(f, c)| (*f, *c));
        let first = entries.next()?;
        let (mut dominant, mut weak) = (first, first);
        for (facet, c) in entries {
            if c > dominant.1 {
                dominant = (facet, c);
            }
            if c < weak.1 {
                weak = (facet, c);
            }
        }
        let spread = dominant.1 - weak.1;
        (spread > self.config.imbalance_threshold).then_some(FacetImbalance {
            dominant: dominant.0,
            weak: weak.0,
            spread,
        })
    }

    pub fn analyze_pair(
        &self,
        pair: FacetPair,
        a: &FacetProfile,
        b: &FacetProfile,
    ) -> TriadResult<PairInteraction> {
        let similarity = a.canonical_vector.cosine_similarity(&b.canonical_vector);
        let (compatibility, compatibility_source) =
            match self.tables.compatibility.get(a.archetype_id, b.archetype_id) {
                Some(weight) => (weight, CompatibilitySource::Table),
                None => {
                    warn!(
                        %pair,
                        a = a.archetype_id,
                        b = b.archetype_id,
                        neutral = self.config.neutral_compatibility,
                        "no compatibility entry, using neutral default"
                    );
                    (self.config.neutral_compatibility, CompatibilitySource::Fallback)
                }
            };
        let relation = self.tables.hexagrams.relation(a.archetype_id, b.archetype_id)?;
        let score = self.config.similarity_weight * similarity
            + self.config.compatibility_weight * compatibility;
        let label = self.config.bands.label(score);

        debug!(%pair, similarity, compatibility, score, %label, "pair interaction");
        Ok(PairInteraction {
            pair,
            archetypes: (a.archetype_id, b.archetype_id),
            similarity,
            compatibility,
            compatibility_source,
            relation,
            score,
            label,
        })
    }
}
