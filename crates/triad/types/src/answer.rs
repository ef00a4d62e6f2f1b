//! Raw answer records produced by the answer-collection front end.

use serde::{Deserialize, Serialize};

/// A single weighted contribution to one dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringTag {
    /// Facet-specific dimension name (e.g. `qian_creativity`, `outward_leadership`).
    pub category: String,
    /// Amount added to that dimension.
    pub weight: f64,
}

impl ScoringTag {
    pub fn new(category: impl Into<String>, weight: f64) -> Self {
        Self {
            category: category.into(),
            weight,
        }
    }
}

/// One answered question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnswerRecord {
    /// Question identifier, resolved to a facet through the questionnaire layout.
    pub question_id: String,
    /// Text of the selected option; also feeds the facet's keyword evidence.
    pub selected_value: String,
    /// Score contributions of the selected option.
    pub scoring_tags: Vec<ScoringTag>,
}

impl RawAnswerRecord {
    pub fn new(
        question_id: impl Into<String>,
        selected_value: impl Into<String>,
        scoring_tags: Vec<ScoringTag>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            selected_value: selected_value.into(),
            scoring_tags,
        }
    }
}
