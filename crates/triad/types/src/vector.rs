//! Facet-specific and canonical score vectors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TriadError;
use crate::facet::Facet;
use crate::trigram::Trigram;

// ── Dimension Vector ────────────────────────────────────────────────────

/// Accumulated scores keyed by a facet's own dimension names.
///
/// Every configured dimension is present, zero when nothing contributed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionVector {
    /// Facet that owns the dimensions.
    pub facet: Facet,
    scores: BTreeMap<String, f64>,
}

impl DimensionVector {
    /// Zero vector over the given dimensions.
    pub fn new<I, S>(facet: Facet, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            facet,
            scores: dimensions.into_iter().map(|d| (d.into(), 0.0)).collect(),
        }
    }

    /// Add `weight` to a known dimension. Returns `false` if the dimension is unknown.
    pub fn add(&mut self, dimension: &str, weight: f64) -> bool {
        match self.scores.get_mut(dimension) {
            Some(score) => {
                *score += weight;
                true
            }
            None => false,
        }
    }

    /// Score of a dimension, if configured.
    pub fn get(&self, dimension: &str) -> Option<f64> {
        self.scores.get(dimension).copied()
    }

    /// Whether the dimension is configured.
    pub fn contains(&self, dimension: &str) -> bool {
        self.scores.contains_key(dimension)
    }

    /// Dimensions and scores in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores.
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }
}

// ── Canonical Vector ────────────────────────────────────────────────────

/// A value for each of the eight trigrams, indexed in canonical order.
///
/// Serialized as a map keyed by trigram name so downstream consumers can read
/// it without knowing the canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Trigram, f64>", try_from = "BTreeMap<Trigram, f64>")]
pub struct CanonicalVector([f64; Trigram::COUNT]);

impl CanonicalVector {
    /// All-zero vector.
    pub fn zeros() -> Self {
        Self([0.0; Trigram::COUNT])
    }

    /// Uniform distribution (1/8 per trigram).
    pub fn uniform() -> Self {
        Self([1.0 / Trigram::COUNT as f64; Trigram::COUNT])
    }

    /// Vector from values in canonical order.
    pub fn from_values(values: [f64; Trigram::COUNT]) -> Self {
        Self(values)
    }

    /// Values in canonical order.
    pub fn values(&self) -> &[f64; Trigram::COUNT] {
        &self.0
    }

    pub fn get(&self, trigram: Trigram) -> f64 {
        self.0[trigram.index()]
    }

    pub fn set(&mut self, trigram: Trigram, value: f64) {
        self.0[trigram.index()] = value;
    }

    pub fn add(&mut self, trigram: Trigram, value: f64) {
        self.0[trigram.index()] += value;
    }

    /// `(trigram, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Trigram, f64)> + '_ {
        Trigram::ALL.into_iter().map(move |t| (t, self.0[t.index()]))
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn dot(&self, other: &CanonicalVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Cosine similarity; 0.0 when either vector has zero norm.
    pub fn cosine_similarity(&self, other: &CanonicalVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom <= f64::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0)
    }

    /// Herfindahl concentration index (sum of squares).
    pub fn herfindahl(&self) -> f64 {
        self.dot(self)
    }

    /// Pairs sorted by value descending; equal values keep canonical order.
    pub fn ranked(&self) -> Vec<(Trigram, f64)> {
        let mut ranked: Vec<(Trigram, f64)> = self.iter().collect();
        // Stable sort keeps canonical order among ties.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl From<CanonicalVector> for BTreeMap<Trigram, f64> {
    fn from(vector: CanonicalVector) -> Self {
        vector.iter().collect()
    }
}

impl TryFrom<BTreeMap<Trigram, f64>> for CanonicalVector {
    type Error = TriadError;

    fn try_from(map: BTreeMap<Trigram, f64>) -> Result<Self, Self::Error> {
        let mut vector = CanonicalVector::zeros();
        for t in Trigram::ALL {
            let value = map
                .get(&t)
                .ok_or_else(|| TriadError::UnknownCategory(format!("missing `{t}` entry")))?;
            vector.set(t, *value);
        }
        Ok(vector)
    }
}
