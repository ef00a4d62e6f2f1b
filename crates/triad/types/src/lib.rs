//! # triad-types
//!
//! Shared vocabulary for the Triad classification engine.
//!
//! A questionnaire is scored into three facets. Each facet is reduced to a
//! distribution over the eight trigrams, the two dominant trigrams pick one of
//! 64 archetypes, and the three resulting profiles are compared pairwise.
//!
//! ```text
//!   RawAnswerRecord ──► DimensionVector ──► CanonicalVector ──► FacetProfile ×3
//!                      (facet basis)       (trigram basis)          │
//!                                                                   ▼
//!                                      AnalysisReport ◄── InteractionResult
//! ```
//!
//! This crate holds only data types and errors; the tables live in
//! `triad-tables` and the pipeline in `triad-engine`.

#![deny(unsafe_code)]

pub mod answer;
pub mod error;
pub mod facet;
pub mod interaction;
pub mod profile;
pub mod report;
pub mod trigram;
pub mod vector;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use answer::{RawAnswerRecord, ScoringTag};
pub use error::{MalformedAnswer, MalformedReason, TriadError, TriadResult};
pub use facet::{Facet, FacetPair};
pub use interaction::{
    ArchetypeRelation, CompatibilitySource, FacetImbalance, InteractionLabel, InteractionResult,
    PairInteraction,
};
pub use profile::{
    FacetProfile, OrientationCandidate, OrientationSource, SelectionPolicy,
    DEFAULT_DOMINANCE_MARGIN,
};
pub use report::AnalysisReport;
pub use trigram::Trigram;
pub use vector::{CanonicalVector, DimensionVector};
