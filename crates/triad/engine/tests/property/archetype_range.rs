//! Property tests: archetype ids stay in range and agree with the lookup matrix.

use proptest::prelude::*;
use triad_engine::*;

fn arb_policy() -> impl Strategy<Value = SelectionPolicy> {
    prop_oneof![
        Just(SelectionPolicy::DistinctPair),
        (0.0f64..1.0).prop_map(|margin| SelectionPolicy::DominanceThreshold { margin }),
    ]
}

proptest! {
    /// Ids are in 1..=64 and match the profile's trigrams.
    #[test]
    fn archetype_ids_are_in_range(
        answers in crate::common::arb_respondent(),
        policy in arb_policy(),
    ) {
        let tables = ConfigTables::builtin();
        let config = EngineConfig::default().with_policy(policy);
        let engine = TriadEngine::new(&tables, config).unwrap();
        let report = engine.analyze_answers(&answers).unwrap();
        let mapper = HexagramMapper::new(&tables);
        for p in report.profiles.values() {
            prop_assert!((1..=64).contains(&p.archetype_id));
            prop_assert_eq!(mapper.trigrams_of(p.archetype_id).unwrap(), (p.upper, p.lower));
            prop_assert_eq!(p.is_pure, p.upper == p.lower);
            prop_assert!(!p.archetype_name.is_empty());
            if policy == SelectionPolicy::DistinctPair {
                prop_assert!(!p.is_pure);
            }
        }
        for pair in report.interaction.pairs.values() {
            prop_assert!(pair.similarity >= 0.0 && pair.similarity <= 1.0 + 1e-12);
        }
    }

    /// Name-based lookup agrees with trigram lookup for every ordered pair.
    #[test]
    fn name_lookup_matches_trigram_lookup(u in 0usize..8, l in 0usize..8) {
        let tables = ConfigTables::builtin();
        let mapper = HexagramMapper::new(&tables);
        let upper = Trigram::from_index(u).unwrap();
        let lower = Trigram::from_index(l).unwrap();
        let by_name = mapper.map_names(upper.name(), lower.name()).unwrap();
        prop_assert_eq!(by_name, mapper.map(upper, lower));
    }
}
