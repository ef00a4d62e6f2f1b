//! Analysis input, facet resolution, and keyword evidence.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use triad_tables::QuestionnaireLayout;
use triad_types::{Facet, RawAnswerRecord, TriadError, TriadResult};

/// Everything a caller supplies for one respondent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub answers: Vec<RawAnswerRecord>,
    /// Optional free text per facet, added to that facet's keyword evidence.
    #[serde(default)]
    pub context: BTreeMap<Facet, String>,
}

impl AnalysisInput {
    pub fn new(answers: Vec<RawAnswerRecord>) -> Self {
        Self {
            answers,
            context: BTreeMap::new(),
        }
    }

    pub fn with_context(mut self, facet: Facet, text: impl Into<String>) -> Self {
        self.context.insert(facet, text.into());
        self
    }
}

/// Answers paired with the facet their question scores.
#[derive(Clone, Debug)]
pub struct ResolvedAnswers<'a> {
    entries: Vec<(Facet, &'a RawAnswerRecord)>,
}

impl<'a> ResolvedAnswers<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &'a RawAnswerRecord)> + '_ {
        self.entries.iter().copied()
    }

    /// Records of one facet, in input order.
    pub fn for_facet(&self, facet: Facet) -> impl Iterator<Item = &'a RawAnswerRecord> + '_ {
        self.entries
            .iter()
            .filter(move |(f, _)| *f == facet)
            .map(|(_, r)| *r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assign every record to its facet through the layout.
///
/// Fails fast on too few answers, unassigned questions, or repeated questions.
pub fn resolve_answers<'a>(
    answers: &'a [RawAnswerRecord],
    layout: &QuestionnaireLayout,
) -> TriadResult<ResolvedAnswers<'a>> {
    if answers.len() < layout.required_answers {
        return Err(TriadError::IncompleteAnswers {
            expected: layout.required_answers,
            received: answers.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut entries = Vec::with_capacity(answers.len());
    for record in answers {
        let facet = layout
            .facet_of(&record.question_id)
            .ok_or_else(|| TriadError::UnassignedQuestion(record.question_id.clone()))?;
        if !seen.insert(record.question_id.as_str()) {
            return Err(TriadError::DuplicateAnswer(record.question_id.clone()));
        }
        entries.push((facet, record));
    }
    Ok(ResolvedAnswers { entries })
}

/// Lowercased words a facet's keyword score is measured against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvidenceContext {
    words: Vec<String>,
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

impl EvidenceContext {
    /// Split text fragments into words.
    ///
    /// Fragments are kept apart, so a phrase never spans two of them.
    pub fn from_parts<'s, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut out = Vec::new();
        for part in parts {
            let start = out.len();
            out.extend(words(part));
            if out.len() > start {
                out.push(String::new());
            }
        }
        out.pop();
        Self { words: out }
    }

    /// Selected option texts of a facet's records plus the caller's free text.
    pub fn for_facet(answers: &ResolvedAnswers<'_>, facet: Facet, extra: Option<&str>) -> Self {
        Self::from_parts(
            answers
                .for_facet(facet)
                .map(|r| r.selected_value.as_str())
                .chain(extra),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive whole-word test; a multi-word keyword must appear as
    /// a consecutive run. Blank keywords never match.
    pub fn contains(&self, keyword: &str) -> bool {
        let needle: Vec<String> = words(keyword).collect();
        !needle.is_empty() && self.words.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// Fraction of keywords present; 0.0 for an empty context or keyword list.
    pub fn match_fraction<S: AsRef<str>>(&self, keywords: &[S]) -> f64 {
        if self.is_empty() || keywords.is_empty() {
            return 0.0;
        }
        let hits = keywords.iter().filter(|k| self.contains(k.as_ref())).count();
        hits as f64 / keywords.len() as f64
    }
}
