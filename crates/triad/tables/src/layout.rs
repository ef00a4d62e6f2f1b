//! Questionnaire layout: which facet each question scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use triad_types::Facet;

/// Question id → facet assignment plus the minimum answer count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireLayout {
    pub required_answers: usize,
    pub assignments: BTreeMap<String, Facet>,
}

impl QuestionnaireLayout {
    /// The standard 36-question layout: 24 drive questions, then 6 social
    /// scenarios and 6 stress scenarios.
    pub fn standard() -> Self {
        let assignments = (1..=36)
            .map(|n| {
                let facet = match n {
                    1..=24 => Facet::DominantDrive,
                    25..=30 => Facet::SocialPresentation,
                    _ => Facet::StressResponse,
                };
                (format!("q{n}"), facet)
            })
            .collect();
        Self {
            required_answers: 36,
            assignments,
        }
    }

    pub fn facet_of(&self, question_id: &str) -> Option<Facet> {
        self.assignments.get(question_id).copied()
    }

    /// Question ids assigned to a facet, in id order.
    pub fn questions_for(&self, facet: Facet) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|(_, f)| **f == facet)
            .map(|(q, _)| q.as_str())
            .collect()
    }

    pub fn question_count(&self) -> usize {
        self.assignments.len()
    }
}

impl Default for QuestionnaireLayout {
    fn default() -> Self {
        Self::standard()
    }
}
