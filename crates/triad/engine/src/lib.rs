//! # triad-engine
//!
//! Deterministic trigram vector classification and facet interaction.
//!
//! ## Architecture
//!
//! ```text
//!   [RawAnswerRecord] ──► resolve_answers (layout: question → Facet)
//!                                 │
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ VectorAggregator │  ← malformed tags skipped + reported
//!                        └────────┬─────────┘
//!                                 ▼          (per facet ×3)
//!                        ┌──────────────────┐
//!                        │ DimensionUnifier │  ← conversion matrix / prefix rename
//!                        └────────┬─────────┘
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ VectorNormalizer │  ← standardize → clip → scale
//!                        └────────┬─────────┘
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ TrigramSelector  │  ← pure or ranked pair
//!                        └────────┬─────────┘
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ DirectionResolver│  ← keyword + affinity scoring
//!                        └────────┬─────────┘
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ HexagramMapper   │  → FacetProfile
//!                        └────────┬─────────┘
//!                                 ▼
//!                        ┌─────────────────────┐
//!                        │ InteractionAnalyzer │  → AnalysisReport
//!                        └─────────────────────┘
//! ```
//!
//! Every stage is a pure function of its input and the shared
//! [`ConfigTables`](triad_tables::ConfigTables). The library logs through
//! `tracing` and never installs a subscriber.
//!
//! ## Features
//!
//! - `parallel`: evaluate the two orientation candidates with `rayon::join`
//!   when [`EngineConfig::parallel_orientation`] is set.

#![deny(unsafe_code)]

pub mod aggregator;
pub mod config;
pub mod direction;
pub mod engine;
pub mod input;
pub mod interaction;
pub mod mapper;
pub mod normalizer;
pub mod selector;
pub mod unifier;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use aggregator::{AggregatedVectors, VectorAggregator};
pub use config::{EngineConfig, InteractionConfig, OrientationWeights, ScoreBands};
pub use direction::{DirectionResolver, Orientation};
pub use engine::TriadEngine;
pub use input::{resolve_answers, AnalysisInput, EvidenceContext, ResolvedAnswers};
pub use interaction::InteractionAnalyzer;
pub use mapper::HexagramMapper;
pub use normalizer::VectorNormalizer;
pub use selector::{Selection, TrigramSelector};
pub use unifier::DimensionUnifier;

pub use triad_tables::ConfigTables;
pub use triad_types::*;
