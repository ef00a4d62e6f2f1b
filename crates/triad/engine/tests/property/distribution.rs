//! Property tests: every normalized vector is a distribution.

use proptest::prelude::*;
use triad_engine::*;

use crate::common::arb_respondent;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_vector() -> impl Strategy<Value = CanonicalVector> {
    prop::array::uniform8(-100.0f64..100.0).prop_map(CanonicalVector::from_values)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Normalization sums to 1 and has no negatives, whatever the input signs.
    #[test]
    fn normalized_vector_is_a_distribution(v in arb_vector()) {
        let out = VectorNormalizer::new().normalize(&v);
        prop_assert!((out.sum() - 1.0).abs() < 1e-9);
        for x in out.values() {
            prop_assert!(*x >= 0.0);
            prop_assert!(x.is_finite());
        }
    }

    /// Flat input of any level falls back to exactly 1/8 per category.
    #[test]
    fn flat_input_is_exactly_uniform(level in 0.0f64..1000.0) {
        let out = VectorNormalizer::new().normalize(&CanonicalVector::from_values([level; 8]));
        for x in out.values() {
            prop_assert_eq!(*x, 0.125);
        }
    }

    /// Every facet profile of a full analysis carries a distribution.
    #[test]
    fn analysis_profiles_are_distributions(answers in arb_respondent()) {
        let tables = ConfigTables::builtin();
        let report = TriadEngine::with_defaults(&tables).analyze_answers(&answers).unwrap();
        prop_assert!(report.warnings.is_empty());
        for p in report.profiles.values() {
            prop_assert!((p.canonical_vector.sum() - 1.0).abs() < 1e-9);
            prop_assert!(p.canonical_vector.values().iter().all(|x| *x >= 0.0));
            prop_assert!(p.raw_vector.values().iter().all(|x| *x >= 0.0));
        }
        for c in report.interaction.concentration.values() {
            prop_assert!(*c >= 0.125 - 1e-9 && *c <= 1.0 + 1e-9);
        }
    }
}

#[test]
fn all_zero_raw_vector_gives_one_eighth() {
    let out = VectorNormalizer::new().normalize(&CanonicalVector::zeros());
    assert!(out.values().iter().all(|x| *x == 0.125));
}
