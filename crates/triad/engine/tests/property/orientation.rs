//! Property tests: orientation resolution is pure and idempotent.

use proptest::prelude::*;
use triad_engine::*;

use crate::common::arb_context;

fn arb_distinct_pair() -> impl Strategy<Value = (Trigram, Trigram)> {
    (0usize..8, 1usize..8).prop_map(|(a, offset)| {
        let first = Trigram::ALL[a];
        let second = Trigram::ALL[(a + offset) % 8];
        (first, second)
    })
}

fn arb_facet() -> impl Strategy<Value = Facet> {
    prop_oneof![
        Just(Facet::DominantDrive),
        Just(Facet::SocialPresentation),
        Just(Facet::StressResponse),
    ]
}

proptest! {
    /// Resolving the same pair twice gives the same orientation.
    #[test]
    fn resolution_is_idempotent(
        (first, second) in arb_distinct_pair(),
        facet in arb_facet(),
        text in arb_context(),
    ) {
        let tables = ConfigTables::builtin();
        let resolver = DirectionResolver::new(&tables, OrientationWeights::default());
        let evidence = EvidenceContext::from_parts([text.as_str()]);
        let a = resolver.resolve(facet, first, second, &evidence);
        let b = resolver.resolve(facet, first, second, &evidence);
        prop_assert_eq!(&a, &b);
        prop_assert!(
            (a.upper, a.lower) == (first, second) || (a.upper, a.lower) == (second, first)
        );
    }

    /// An evidence-decided orientation does not depend on which trigram ranked first.
    #[test]
    fn evidence_decisions_ignore_input_order(
        (first, second) in arb_distinct_pair(),
        facet in arb_facet(),
        text in arb_context(),
    ) {
        let tables = ConfigTables::builtin();
        let resolver = DirectionResolver::new(&tables, OrientationWeights::default());
        let evidence = EvidenceContext::from_parts([text.as_str()]);
        let forward = resolver.resolve(facet, first, second, &evidence);
        let backward = resolver.resolve(facet, second, first, &evidence);
        if forward.source == OrientationSource::Evidence {
            prop_assert_eq!((forward.upper, forward.lower), (backward.upper, backward.lower));
        } else {
            prop_assert_eq!(forward.source, OrientationSource::Ranked);
            prop_assert_eq!((forward.upper, forward.lower), (first, second));
            prop_assert_eq!((backward.upper, backward.lower), (second, first));
        }
    }

    /// Scores stay within their bounds.
    #[test]
    fn candidate_scores_are_bounded(
        (first, second) in arb_distinct_pair(),
        facet in arb_facet(),
        text in arb_context(),
    ) {
        let tables = ConfigTables::builtin();
        let resolver = DirectionResolver::new(&tables, OrientationWeights::default());
        let evidence = EvidenceContext::from_parts([text.as_str()]);
        let c = resolver.evaluate(facet, first, second, &evidence);
        prop_assert!((0.0..=1.0).contains(&c.keyword_score));
        prop_assert!((0.0..=1.0).contains(&c.affinity_score));
        prop_assert!(c.total_score >= 0.0 && c.total_score <= 1.0 + 1e-12);
    }
}
