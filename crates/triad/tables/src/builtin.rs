//! Built-in representative tables.
//!
//! Every function here builds fresh data; nothing is cached.

use std::collections::BTreeMap;

use triad_types::{ArchetypeRelation, Facet, Trigram};

use crate::affinity::{CategoryAffinity, KeywordAffinity};
use crate::compatibility::CompatibilityTable;
use crate::conversion::ConversionMatrix;
use crate::hexagram::{ArchetypeCatalog, ArchetypeEntry, HexagramMatrix};

use Trigram::{Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// Version string of the built-in tables.
pub const BUILTIN_VERSION: &str = "builtin-1";

/// Dominant-drive dimensions, already in `<category>_<trait>` form.
pub fn drive_dimensions() -> Vec<String> {
    [
        "qian_creativity",
        "dui_harmony",
        "li_expression",
        "zhen_action",
        "xun_adaptability",
        "kan_inquiry",
        "gen_stability",
        "kun_receptivity",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

pub fn social_matrix() -> ConversionMatrix {
    ConversionMatrix::from_rows([
        ("outward_leadership", &[(Qian, 0.7), (Zhen, 0.2), (Li, 0.1)][..]),
        ("outward_harmony", &[(Dui, 0.7), (Kun, 0.15), (Xun, 0.15)][..]),
        ("outward_expression", &[(Li, 0.7), (Dui, 0.2), (Qian, 0.1)][..]),
        ("outward_action", &[(Zhen, 0.7), (Qian, 0.2), (Li, 0.1)][..]),
        ("inward_adaptability", &[(Xun, 0.7), (Dui, 0.15), (Kun, 0.15)][..]),
        ("inward_analysis", &[(Kan, 0.7), (Gen, 0.2), (Xun, 0.1)][..]),
        ("inward_stability", &[(Gen, 0.7), (Kun, 0.2), (Kan, 0.1)][..]),
        ("inward_support", &[(Kun, 0.7), (Xun, 0.15), (Gen, 0.15)][..]),
    ])
}

pub fn stress_matrix() -> ConversionMatrix {
    ConversionMatrix::from_rows([
        ("defense_confrontation", &[(Qian, 0.7), (Zhen, 0.2), (Li, 0.1)][..]),
        ("defense_harmonizing", &[(Dui, 0.7), (Kun, 0.15), (Xun, 0.15)][..]),
        ("defense_transformation", &[(Li, 0.7), (Xun, 0.2), (Qian, 0.1)][..]),
        ("defense_bracing", &[(Zhen, 0.7), (Qian, 0.2), (Gen, 0.1)][..]),
        ("defense_avoidance", &[(Xun, 0.7), (Dui, 0.2), (Kun, 0.1)][..]),
        ("defense_endurance", &[(Kan, 0.7), (Gen, 0.2), (Kun, 0.1)][..]),
        ("defense_boundary", &[(Gen, 0.7), (Kan, 0.2), (Kun, 0.1)][..]),
        ("defense_withdrawal", &[(Kun, 0.7), (Gen, 0.2), (Kan, 0.1)][..]),
    ])
}

/// King Wen numbering; rows are the upper trigram, columns the lower.
pub fn hexagram_matrix() -> HexagramMatrix {
    HexagramMatrix::new([
        [1, 10, 13, 25, 44, 6, 33, 12],
        [43, 58, 49, 17, 28, 47, 31, 45],
        [14, 38, 30, 21, 50, 64, 56, 35],
        [34, 54, 55, 51, 32, 40, 62, 16],
        [9, 61, 37, 42, 57, 59, 53, 20],
        [5, 60, 63, 3, 48, 29, 39, 8],
        [26, 41, 22, 27, 18, 4, 52, 23],
        [11, 19, 36, 24, 46, 7, 15, 2],
    ])
}

const ARCHETYPES: [(&str, [&str; 3]); 64] = [
    ("The Creative", ["creation", "leadership", "strength"]),
    ("The Receptive", ["acceptance", "nurture", "support"]),
    ("Difficulty at the Beginning", ["beginning", "perseverance", "growth"]),
    ("Youthful Folly", ["learning", "curiosity", "guidance"]),
    ("Waiting", ["patience", "timing", "trust"]),
    ("Conflict", ["dispute", "caution", "justice"]),
    ("The Army", ["discipline", "organization", "command"]),
    ("Holding Together", ["unity", "loyalty", "belonging"]),
    ("Small Taming", ["restraint", "detail", "gentleness"]),
    ("Treading", ["courtesy", "dignity", "conduct"]),
    ("Peace", ["balance", "prosperity", "harmony"]),
    ("Standstill", ["stagnation", "withdrawal", "integrity"]),
    ("Fellowship", ["community", "cooperation", "openness"]),
    ("Great Possession", ["abundance", "generosity", "clarity"]),
    ("Modesty", ["humility", "balance", "service"]),
    ("Enthusiasm", ["inspiration", "energy", "motivation"]),
    ("Following", ["adaptability", "trust", "flexibility"]),
    ("Work on the Decayed", ["repair", "responsibility", "renewal"]),
    ("Approach", ["approach", "encouragement", "opportunity"]),
    ("Contemplation", ["observation", "reflection", "insight"]),
    ("Biting Through", ["decisiveness", "justice", "clarity"]),
    ("Grace", ["beauty", "expression", "refinement"]),
    ("Splitting Apart", ["decline", "endurance", "letting go"]),
    ("Return", ["return", "recovery", "renewal"]),
    ("Innocence", ["sincerity", "spontaneity", "authenticity"]),
    ("Great Taming", ["accumulation", "restraint", "strength"]),
    ("Nourishment", ["nourishment", "care", "moderation"]),
    ("Great Exceeding", ["pressure", "courage", "transition"]),
    ("The Abysmal", ["danger", "hardship", "perseverance"]),
    ("The Clinging", ["clarity", "passion", "dependence"]),
    ("Influence", ["attraction", "sensitivity", "receptivity"]),
    ("Duration", ["constancy", "commitment", "endurance"]),
    ("Retreat", ["retreat", "boundaries", "timing"]),
    ("Great Power", ["power", "action", "integrity"]),
    ("Progress", ["progress", "recognition", "confidence"]),
    ("Darkening of the Light", ["adversity", "resilience", "discretion"]),
    ("The Family", ["family", "roles", "nurture"]),
    ("Opposition", ["difference", "individuality", "reconciliation"]),
    ("Obstruction", ["obstacle", "reflection", "support"]),
    ("Deliverance", ["release", "forgiveness", "relief"]),
    ("Decrease", ["simplicity", "sacrifice", "sincerity"]),
    ("Increase", ["growth", "generosity", "initiative"]),
    ("Breakthrough", ["decision", "breakthrough", "resolve"]),
    ("Coming to Meet", ["encounter", "temptation", "vigilance"]),
    ("Gathering Together", ["gathering", "community", "leadership"]),
    ("Pushing Upward", ["ascent", "effort", "ambition"]),
    ("Oppression", ["exhaustion", "adversity", "perseverance"]),
    ("The Well", ["resource", "depth", "service"]),
    ("Revolution", ["change", "transformation", "renewal"]),
    ("The Cauldron", ["transformation", "culture", "creativity"]),
    ("The Arousing", ["shock", "awakening", "action"]),
    ("Keeping Still", ["stillness", "meditation", "stability"]),
    ("Development", ["gradual", "patience", "progress"]),
    ("The Marrying Maiden", ["transition", "relationship", "adaptation"]),
    ("Abundance", ["fullness", "success", "expression"]),
    ("The Wanderer", ["journey", "independence", "curiosity"]),
    ("The Gentle", ["penetration", "influence", "consideration"]),
    ("The Joyous", ["joy", "communication", "harmony"]),
    ("Dispersion", ["dissolution", "openness", "flexibility"]),
    ("Limitation", ["limits", "boundaries", "discipline"]),
    ("Inner Truth", ["truth", "trust", "sincerity"]),
    ("Small Exceeding", ["caution", "detail", "modesty"]),
    ("After Completion", ["completion", "harmony", "achievement"]),
    ("Before Completion", ["incompletion", "possibility", "continuation"]),
];

pub fn archetype_catalog() -> ArchetypeCatalog {
    ArchetypeCatalog::new(
        ARCHETYPES
            .iter()
            .zip(1u8..)
            .map(|((name, keywords), id)| ArchetypeEntry::new(id, name, keywords))
            .collect(),
    )
}

pub fn category_affinity() -> CategoryAffinity {
    let row = |values: [f64; 8]| -> BTreeMap<Trigram, f64> {
        Trigram::ALL.into_iter().zip(values).collect()
    };
    let mut weights = BTreeMap::new();
    weights.insert(
        Facet::DominantDrive,
        row([0.9, 0.4, 0.5, 0.85, 0.35, 0.8, 0.75, 0.3]),
    );
    weights.insert(
        Facet::SocialPresentation,
        row([0.5, 0.9, 0.85, 0.45, 0.8, 0.35, 0.4, 0.75]),
    );
    weights.insert(
        Facet::StressResponse,
        row([0.3, 0.4, 0.35, 0.45, 0.75, 0.8, 0.9, 0.85]),
    );
    CategoryAffinity {
        min: 0.0,
        max: 1.0,
        weights,
    }
}

pub fn keyword_affinity() -> KeywordAffinity {
    let entries: [(&str, &[Trigram]); 26] = [
        ("creativity", &[Qian]),
        ("leadership", &[Qian]),
        ("initiative", &[Qian, Zhen]),
        ("harmony", &[Dui]),
        ("joy", &[Dui]),
        ("communication", &[Dui, Li]),
        ("expression", &[Li]),
        ("clarity", &[Li]),
        ("passion", &[Li]),
        ("action", &[Zhen]),
        ("energy", &[Zhen]),
        ("change", &[Zhen, Xun]),
        ("adaptability", &[Xun]),
        ("flexibility", &[Xun]),
        ("consideration", &[Xun]),
        ("inquiry", &[Kan]),
        ("insight", &[Kan]),
        ("perseverance", &[Kan]),
        ("stability", &[Gen]),
        ("boundaries", &[Gen]),
        ("patience", &[Gen, Kun]),
        ("receptivity", &[Kun]),
        ("support", &[Kun]),
        ("nurture", &[Kun]),
        ("depth", &[Kan]),
        ("restraint", &[Gen]),
    ];
    KeywordAffinity::new(
        entries
            .iter()
            .map(|(k, ts)| (k.to_string(), ts.to_vec()))
            .collect(),
    )
}

/// Weight of a structural relation in the built-in compatibility table.
pub fn relation_weight(relation: ArchetypeRelation) -> Option<f64> {
    match relation {
        ArchetypeRelation::Identical => Some(0.5),
        ArchetypeRelation::Inverted => Some(0.4),
        ArchetypeRelation::Adjacent => Some(0.3),
        ArchetypeRelation::Complementary => Some(-0.1),
        ArchetypeRelation::Unrelated => None,
    }
}

/// Structural weights for every related pair, with the classic pairs overridden.
pub fn compatibility_table() -> CompatibilityTable {
    // The built-in matrix is a permutation, so every relation lookup succeeds.
    let mut table = CompatibilityTable::structural(&hexagram_matrix(), relation_weight)
        .unwrap_or_default();
    table.insert(1, 2, 0.9);
    table.insert(3, 4, 0.7);
    table.insert(29, 30, 0.6);
    table
}

/// Unordered pairs whose orientation is fixed rather than decided by evidence.
///
/// Empty by default; custom tables may list pairs here.
pub fn fixed_orientations() -> Vec<[Trigram; 2]> {
    Vec::new()
}
