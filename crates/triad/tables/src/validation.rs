//! Structural validation of configuration tables.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triad_types::{Facet, Trigram};

use crate::conversion::{category_prefix, ConversionMatrix};
use crate::hexagram::ARCHETYPE_COUNT;
use crate::tables::ConfigTables;

/// A single problem found in the tables.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("[{code}] {message}")]
pub struct TableIssue {
    /// Stable machine-readable code.
    pub code: String,
    pub message: String,
}

impl TableIssue {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a set of tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableValidation {
    pub errors: Vec<TableIssue>,
    /// Non-fatal findings.
    pub warnings: Vec<TableIssue>,
}

impl TableValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn with_error(mut self, issue: TableIssue) -> Self {
        self.errors.push(issue);
        self
    }

    pub fn with_warning(mut self, issue: TableIssue) -> Self {
        self.warnings.push(issue);
        self
    }

    pub fn merge(mut self, other: TableValidation) -> Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    /// Error messages joined with `; `.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Run every check over the tables.
pub fn validate_tables(tables: &ConfigTables) -> TableValidation {
    TableValidation::default()
        .merge(check_drive_dimensions(&tables.drive_dimensions))
        .merge(check_matrix(Facet::SocialPresentation, &tables.social_matrix))
        .merge(check_matrix(Facet::StressResponse, &tables.stress_matrix))
        .merge(check_hexagrams(tables))
        .merge(check_affinity(tables))
        .merge(check_compatibility(tables))
        .merge(check_layout(tables))
}

fn check_drive_dimensions(dimensions: &[String]) -> TableValidation {
    let mut result = TableValidation::default();
    let mut seen = BTreeSet::new();
    for key in dimensions {
        match category_prefix(key) {
            Ok(trigram) => {
                if !seen.insert(trigram) {
                    result = result.with_error(TableIssue::new(
                        "drive-duplicate",
                        format!("dominant-drive dimension `{key}` repeats category `{trigram}`"),
                    ));
                }
            }
            Err(_) => {
                result = result.with_error(TableIssue::new(
                    "drive-prefix",
                    format!("dominant-drive dimension `{key}` has no trigram prefix"),
                ));
            }
        }
    }
    if seen.len() != Trigram::COUNT {
        result = result.with_error(TableIssue::new(
            "drive-coverage",
            format!(
                "dominant-drive dimensions cover {} of {} trigrams",
                seen.len(),
                Trigram::COUNT
            ),
        ));
    }
    result
}

fn check_matrix(facet: Facet, matrix: &ConversionMatrix) -> TableValidation {
    let mut result = TableValidation::default();
    if matrix.dimensions.len() != Trigram::COUNT {
        result = result.with_error(TableIssue::new(
            "matrix-dimensions",
            format!(
                "{facet} matrix has {} dimensions, expected {}",
                matrix.dimensions.len(),
                Trigram::COUNT
            ),
        ));
    }
    let unique: BTreeSet<&String> = matrix.dimensions.iter().collect();
    if unique.len() != matrix.dimensions.len() {
        result = result.with_error(TableIssue::new(
            "matrix-duplicate",
            format!("{facet} matrix lists a dimension twice"),
        ));
    }
    for dimension in &matrix.dimensions {
        if !matrix.rows.contains_key(dimension) {
            result = result.with_error(TableIssue::new(
                "matrix-missing-row",
                format!("{facet} dimension `{dimension}` has no matrix row"),
            ));
        }
    }
    for (dimension, row) in &matrix.rows {
        if !matrix.has_dimension(dimension) {
            result = result.with_error(TableIssue::new(
                "matrix-unknown-row",
                format!("{facet} matrix row `{dimension}` is not a configured dimension"),
            ));
        }
        for (trigram, weight) in row {
            if !weight.is_finite() || *weight < 0.0 {
                result = result.with_error(TableIssue::new(
                    "matrix-weight",
                    format!("{facet} matrix weight {dimension}→{trigram} is {weight}"),
                ));
            }
        }
        let sum: f64 = row.values().sum();
        if sum <= 0.0 {
            result = result.with_warning(TableIssue::new(
                "matrix-empty-row",
                format!("{facet} dimension `{dimension}` distributes no weight"),
            ));
        }
    }
    result
}

fn check_hexagrams(tables: &ConfigTables) -> TableValidation {
    let mut result = TableValidation::default();
    if !tables.hexagrams.is_permutation() {
        result = result.with_error(TableIssue::new(
            "hexagram-permutation",
            "hexagram matrix is not a permutation of 1..=64",
        ));
    }
    for id in 1..=ARCHETYPE_COUNT {
        match tables.archetypes.get(id) {
            None => {
                result = result.with_error(TableIssue::new(
                    "catalog-missing",
                    format!("archetype {id} has no catalog entry"),
                ));
            }
            Some(entry) if entry.keywords.is_empty() => {
                result = result.with_warning(TableIssue::new(
                    "catalog-keywords",
                    format!("archetype {id} has no keywords; trigram keywords will be used"),
                ));
            }
            Some(_) => {}
        }
    }
    for entry in &tables.archetypes.entries {
        if entry.id == 0 || entry.id > ARCHETYPE_COUNT {
            result = result.with_error(TableIssue::new(
                "catalog-id",
                format!("catalog entry `{}` has id {}", entry.name, entry.id),
            ));
        }
    }
    result
}

fn check_affinity(tables: &ConfigTables) -> TableValidation {
    let mut result = TableValidation::default();
    let affinity = &tables.category_affinity;
    if !(affinity.min.is_finite() && affinity.max.is_finite()) || affinity.min > affinity.max {
        result = result.with_error(TableIssue::new(
            "affinity-bounds",
            format!(
                "affinity bounds [{}, {}] are not an ordered finite range",
                affinity.min, affinity.max
            ),
        ));
    }
    for facet in Facet::ALL {
        if !affinity.weights.contains_key(&facet) {
            result = result.with_warning(TableIssue::new(
                "affinity-facet",
                format!("no category affinity for {facet}; lower bound is used"),
            ));
        }
    }
    result
}

fn check_compatibility(tables: &ConfigTables) -> TableValidation {
    let mut result = TableValidation::default();
    for entry in tables.compatibility.entries() {
        if entry.a == 0 || entry.b > ARCHETYPE_COUNT {
            result = result.with_error(TableIssue::new(
                "compatibility-id",
                format!("compatibility pair ({}, {}) is out of range", entry.a, entry.b),
            ));
        }
        if !(-1.0..=1.0).contains(&entry.weight) {
            result = result.with_error(TableIssue::new(
                "compatibility-weight",
                format!(
                    "compatibility weight {} for ({}, {}) is outside [-1, 1]",
                    entry.weight, entry.a, entry.b
                ),
            ));
        }
    }
    result
}

fn check_layout(tables: &ConfigTables) -> TableValidation {
    let mut result = TableValidation::default();
    let layout = &tables.layout;
    if layout.required_answers > layout.question_count() {
        result = result.with_error(TableIssue::new(
            "layout-required",
            format!(
                "layout requires {} answers but assigns only {} questions",
                layout.required_answers,
                layout.question_count()
            ),
        ));
    }
    for facet in Facet::ALL {
        if layout.questions_for(facet).is_empty() {
            result = result.with_warning(TableIssue::new(
                "layout-facet",
                format!("no questions assigned to {facet}"),
            ));
        }
    }
    result
}
