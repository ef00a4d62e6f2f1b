//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use triad_engine::{ConfigTables, Facet, RawAnswerRecord, ScoringTag};

/// First question id of each facet in the standard layout.
fn first_question(facet: Facet) -> usize {
    match facet {
        Facet::DominantDrive => 1,
        Facet::SocialPresentation => 25,
        Facet::StressResponse => 31,
    }
}

fn tags(weights: &[(&str, f64)]) -> Vec<ScoringTag> {
    weights.iter().map(|(c, w)| ScoringTag::new(*c, *w)).collect()
}

/// A complete 36-answer respondent whose scores sit on the first question of
/// each facet; every other answer is blank.
pub fn respondent(
    drive: &[(&str, f64)],
    social: &[(&str, f64)],
    stress: &[(&str, f64)],
) -> Vec<RawAnswerRecord> {
    (1..=36)
        .map(|n| {
            let scoring = if n == first_question(Facet::DominantDrive) {
                tags(drive)
            } else if n == first_question(Facet::SocialPresentation) {
                tags(social)
            } else if n == first_question(Facet::StressResponse) {
                tags(stress)
            } else {
                Vec::new()
            };
            RawAnswerRecord::new(format!("q{n}"), "", scoring)
        })
        .collect()
}

/// Social-presentation raw scores 8.5, 7.2, …, 2.1 over the configured dimensions in order.
pub fn social_example(tables: &ConfigTables) -> Vec<(String, f64)> {
    tables
        .dimensions_for(Facet::SocialPresentation)
        .iter()
        .cloned()
        .zip([8.5, 7.2, 6.8, 5.5, 4.3, 3.7, 2.9, 2.1])
        .collect()
}

pub fn as_pairs(owned: &[(String, f64)]) -> Vec<(&str, f64)> {
    owned.iter().map(|(c, w)| (c.as_str(), *w)).collect()
}

/// Arbitrary complete respondent over the built-in tables: each answer carries
/// up to three tags naming valid dimensions of its facet.
pub fn arb_respondent() -> impl Strategy<Value = Vec<RawAnswerRecord>> {
    prop::collection::vec(
        prop::collection::vec((0usize..8, 0.0f64..5.0), 0..4),
        36,
    )
    .prop_map(|answers| {
        let tables = ConfigTables::builtin();
        answers
            .into_iter()
            .enumerate()
            .map(|(i, picks)| {
                let id = format!("q{}", i + 1);
                let facet = tables
                    .layout
                    .facet_of(&id)
                    .unwrap_or(Facet::DominantDrive);
                let dims = tables.dimensions_for(facet);
                let scoring = picks
                    .into_iter()
                    .map(|(d, w)| ScoringTag::new(dims[d].clone(), w))
                    .collect();
                RawAnswerRecord::new(id, "", scoring)
            })
            .collect()
    })
}

/// Arbitrary free text drawn from archetype keywords and filler words.
pub fn arb_context() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("breakthrough"),
            Just("courtesy"),
            Just("perseverance"),
            Just("harmony"),
            Just("stillness"),
            Just("change"),
            Just("quietly"),
            Just("together"),
        ],
        0..5,
    )
    .prop_map(|words| words.join(" "))
}
