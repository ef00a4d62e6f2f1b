//! Property tests: identical input and tables give byte-identical output.

use proptest::prelude::*;
use triad_engine::*;

use crate::common::{arb_context, arb_respondent};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Two runs serialize to the same JSON.
    #[test]
    fn repeated_runs_serialize_identically(
        answers in arb_respondent(),
        context in arb_context(),
    ) {
        let tables = ConfigTables::builtin();
        let input = AnalysisInput::new(answers).with_context(Facet::StressResponse, context);
        let engine = TriadEngine::with_defaults(&tables);
        let first = engine.analyze(&input).unwrap().to_json_pretty().unwrap();
        let second = engine.analyze(&input).unwrap().to_json_pretty().unwrap();
        prop_assert_eq!(first, second);
    }

    /// Requesting parallel orientation never changes the result.
    #[test]
    fn parallel_orientation_matches_sequential(
        answers in arb_respondent(),
        context in arb_context(),
    ) {
        let tables = ConfigTables::builtin();
        let input = AnalysisInput::new(answers).with_context(Facet::DominantDrive, context);
        let sequential = TriadEngine::with_defaults(&tables).analyze(&input).unwrap();
        let config = EngineConfig {
            parallel_orientation: true,
            ..EngineConfig::default()
        };
        let parallel = TriadEngine::new(&tables, config).unwrap().analyze(&input).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

#[test]
fn engines_on_separate_threads_agree() {
    let tables = ConfigTables::builtin();
    let answers = crate::common::respondent(
        &[("zhen_action", 3.0), ("li_expression", 2.0)],
        &[("outward_expression", 1.0)],
        &[("defense_avoidance", 2.0)],
    );
    let reports: Vec<AnalysisReport> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| TriadEngine::with_defaults(&tables).analyze_answers(&answers)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    assert!(reports.windows(2).all(|w| w[0] == w[1]));
}
