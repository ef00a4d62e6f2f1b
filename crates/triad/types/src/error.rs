//! Error types shared by every Triad crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facet::Facet;

/// Errors that abort an analysis run or a table load.
#[derive(Debug, Error)]
pub enum TriadError {
    /// Fewer answers than the questionnaire requires.
    #[error("incomplete answers: expected at least {expected}, received {received}")]
    IncompleteAnswers { expected: usize, received: usize },

    /// An answer references a question the layout does not assign to a facet.
    #[error("question `{0}` is not assigned to any facet")]
    UnassignedQuestion(String),

    /// The same question was answered more than once.
    #[error("question `{0}` answered more than once")]
    DuplicateAnswer(String),

    /// A category name outside the canonical eight.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// An archetype id outside 1..=64 or missing from the catalog.
    #[error("unknown archetype id: {0}")]
    UnknownArchetype(u8),

    /// Configuration tables failed validation.
    #[error("invalid tables: {0}")]
    InvalidTables(String),

    /// Configuration text could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for Triad operations.
pub type TriadResult<T> = Result<T, TriadError>;

/// Why a scoring tag was skipped during aggregation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedReason {
    /// The tag names a dimension the facet does not define.
    UnknownDimension,
    /// The tag weight is negative, NaN, or infinite.
    InvalidWeight,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDimension => write!(f, "unknown dimension"),
            Self::InvalidWeight => write!(f, "invalid weight"),
        }
    }
}

/// A recoverable problem with a single scoring tag.
///
/// The aggregator skips the tag, logs a warning, and keeps going; the
/// collected values travel with the final report.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("malformed answer {question_id} ({facet}): {reason} `{category}` (weight {weight})")]
pub struct MalformedAnswer {
    /// Question the tag belongs to.
    pub question_id: String,
    /// Facet the question was assigned to.
    pub facet: Facet,
    /// Dimension name as it appeared in the tag.
    pub category: String,
    /// Weight as it appeared in the tag.
    pub weight: f64,
    /// What was wrong with it.
    pub reason: MalformedReason,
}
