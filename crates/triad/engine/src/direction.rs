//! Decides which of two selected trigrams is upper.
//!
//! Both orderings are scored against keyword evidence and category affinity;
//! the higher total wins and exact ties keep the ranked order.

use tracing::debug;
use triad_tables::ConfigTables;
use triad_types::{Facet, OrientationCandidate, OrientationSource, Trigram};

use crate::config::OrientationWeights;
use crate::input::EvidenceContext;
use crate::mapper::HexagramMapper;

/// Scores closer than this are a tie.
pub const TIE_TOLERANCE: f64 = 1e-12;

/// Resolved ordering of a pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub upper: Trigram,
    pub lower: Trigram,
    pub source: OrientationSource,
    /// Both evaluated candidates, ranked ordering first; absent for table-fixed pairs.
    pub candidates: Option<[OrientationCandidate; 2]>,
}

pub struct DirectionResolver<'t> {
    tables: &'t ConfigTables,
    weights: OrientationWeights,
    parallel: bool,
}

impl<'t> DirectionResolver<'t> {
    pub fn new(tables: &'t ConfigTables, weights: OrientationWeights) -> Self {
        Self {
            tables,
            weights,
            parallel: false,
        }
    }

    /// Request parallel evaluation; honoured only with the `parallel` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    /// Order `first` (ranked higher) and `second` for a facet.
    pub fn resolve(
        &self,
        facet: Facet,
        first: Trigram,
        second: Trigram,
        evidence: &EvidenceContext,
    ) -> Orientation {
        if let Some((upper, lower)) = self.tables.fixed_orientation(first, second) {
            debug!(facet = %facet, %upper, %lower, "orientation fixed by tables");
            return Orientation {
                upper,
                lower,
                source: OrientationSource::Table,
                candidates: None,
            };
        }

        let (ranked, flipped) = self.evaluate_both(facet, first, second, evidence);
        let (upper, lower, source) = if flipped.total_score - ranked.total_score > TIE_TOLERANCE {
            (second, first, OrientationSource::Evidence)
        } else if ranked.total_score - flipped.total_score > TIE_TOLERANCE {
            (first, second, OrientationSource::Evidence)
        } else {
            (first, second, OrientationSource::Ranked)
        };
        debug!(
            facet = %facet,
            %upper,
            %lower,
            ranked_score = ranked.total_score,
            flipped_score = flipped.total_score,
            ?source,
            "orientation resolved"
        );
        Orientation {
            upper,
            lower,
            source,
            candidates: Some([ranked, flipped]),
        }
    }

    /// Score one ordering.
    pub fn evaluate(
        &self,
        facet: Facet,
        upper: Trigram,
        lower: Trigram,
        evidence: &EvidenceContext,
    ) -> OrientationCandidate {
        let mapper = HexagramMapper::new(self.tables);
        let archetype_id = mapper.map(upper, lower);
        let keywords = mapper.keywords(archetype_id, upper);
        let keyword_score = evidence.match_fraction(keywords.as_slice());
        let affinity_score = self
            .tables
            .category_affinity
            .normalized_pair(facet, upper, lower);
        OrientationCandidate {
            upper,
            lower,
            archetype_id,
            keyword_score,
            affinity_score,
            total_score: self.weights.keyword * keyword_score
                + self.weights.affinity * affinity_score,
        }
    }

    #[cfg(feature = "parallel")]
    fn evaluate_both(
        &self,
        facet: Facet,
        first: Trigram,
        second: Trigram,
        evidence: &EvidenceContext,
    ) -> (OrientationCandidate, OrientationCandidate) {
        if self.parallel {
            rayon::join(
                || self.evaluate(facet, first, second, evidence),
                || self.evaluate(facet, second, first, evidence),
            )
        } else {
            (
                self.evaluate(facet, first, second, evidence),
                self.evaluate(facet, second, first, evidence),
            )
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_both(
        &self,
        facet: Facet,
        first: Trigram,
        second: Trigram,
        evidence: &EvidenceContext,
    ) -> (OrientationCandidate, OrientationCandidate) {
        (
            self.evaluate(facet, first, second, evidence),
            self.evaluate(facet, second, first, evidence),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(tables: &ConfigTables) -> DirectionResolver<'_> {
        DirectionResolver::new(tables, OrientationWeights::default())
    }

    #[test]
    fn tie_keeps_ranked_order() {
        let tables = ConfigTables::builtin();
        let o = resolver(&tables).resolve(
            Facet::SocialPresentation,
            Trigram::Qian,
            Trigram::Dui,
            &EvidenceContext::default(),
        );
        assert_eq!((o.upper, o.lower), (Trigram::Qian, Trigram::Dui));
        assert_eq!(o.source, OrientationSource::Ranked);
        let [ranked, flipped] = o.candidates.unwrap();
        assert_eq!(ranked.archetype_id, 10);
        assert_eq!(flipped.archetype_id, 43);
        assert!((ranked.affinity_score - 0.7).abs() < 1e-12);
        assert_eq!(ranked.keyword_score, 0.0);
    }

    #[test]
    fn keyword_evidence_flips_orientation() {
        let tables = ConfigTables::builtin();
        let evidence = EvidenceContext::from_parts(["A sudden breakthrough"]);
        let o = resolver(&tables).resolve(
            Facet::SocialPresentation,
            Trigram::Qian,
            Trigram::Dui,
            &evidence,
        );
        assert_eq!((o.upper, o.lower), (Trigram::Dui, Trigram::Qian));
        assert_eq!(o.source, OrientationSource::Evidence);
        let [_, flipped] = o.candidates.unwrap();
        assert!((flipped.keyword_score - 1.0 / 3.0).abs() < 1e-12);
        assert!((flipped.total_score - (0.7 / 3.0 + 0.3 * 0.7)).abs() < 1e-12);
    }

    #[test]
    fn keyword_inside_a_longer_word_is_not_evidence() {
        let tables = ConfigTables::builtin();
        let evidence = EvidenceContext::from_parts(["I suffer from indecision"]);
        let o = resolver(&tables).resolve(
            Facet::SocialPresentation,
            Trigram::Qian,
            Trigram::Dui,
            &evidence,
        );
        assert_eq!((o.upper, o.lower), (Trigram::Qian, Trigram::Dui));
        assert_eq!(o.source, OrientationSource::Ranked);
    }

    #[test]
    fn evidence_for_ranked_order_is_reported() {
        let tables = ConfigTables::builtin();
        let evidence = EvidenceContext::from_parts(["courtesy and dignity"]);
        let o = resolver(&tables).resolve(
            Facet::DominantDrive,
            Trigram::Qian,
            Trigram::Dui,
            &evidence,
        );
        assert_eq!((o.upper, o.lower), (Trigram::Qian, Trigram::Dui));
        assert_eq!(o.source, OrientationSource::Evidence);
    }

    #[test]
    fn fixed_pairs_skip_evaluation() {
        let mut tables = ConfigTables::builtin();
        tables.fixed_orientations.push([Trigram::Dui, Trigram::Qian]);
        let o = resolver(&tables).resolve(
            Facet::SocialPresentation,
            Trigram::Qian,
            Trigram::Dui,
            &EvidenceContext::default(),
        );
        assert_eq!((o.upper, o.lower), (Trigram::Dui, Trigram::Qian));
        assert_eq!(o.source, OrientationSource::Table);
        assert!(o.candidates.is_none());
    }

    #[test]
    fn resolution_is_idempotent() {
        let tables = ConfigTables::builtin();
        let evidence = EvidenceContext::from_parts(["danger and perseverance"]);
        let r = resolver(&tables);
        let a = r.resolve(Facet::StressResponse, Trigram::Kan, Trigram::Gen, &evidence);
        let b = r.resolve(Facet::StressResponse, Trigram::Kan, Trigram::Gen, &evidence);
        assert_eq!(a, b);
    }

    #[test]
    fn parallel_request_matches_sequential() {
        let tables = ConfigTables::builtin();
        let evidence = EvidenceContext::from_parts(["breakthrough"]);
        let seq =
            resolver(&tables).resolve(Facet::DominantDrive, Trigram::Li, Trigram::Kan, &evidence);
        let par_resolver = resolver(&tables).with_parallel(true);
        assert_eq!(par_resolver.is_parallel(), cfg!(feature = "parallel"));
        let par = par_resolver.resolve(Facet::DominantDrive, Trigram::Li, Trigram::Kan, &evidence);
        assert_eq!(seq, par);
    }
}
