//! # triad-tables
//!
//! Static, versioned data that parameterizes the Triad pipeline.
//!
//! ```text
//!   ConfigTables
//!   ├── drive_dimensions      dominant-drive keys (`qian_creativity`, ...)
//!   ├── social_matrix         social-presentation dimension → trigram weights
//!   ├── stress_matrix         stress-response dimension → trigram weights
//!   ├── hexagrams             8×8 (upper, lower) → archetype id
//!   ├── archetypes            id → name + keywords
//!   ├── category_affinity     per-facet trigram affinity
//!   ├── keyword_affinity      keyword → trigrams
//!   ├── compatibility         archetype pair → weight
//!   ├── fixed_orientations    pairs whose ordering is not evidence-driven
//!   └── layout                question id → facet
//! ```
//!
//! Tables load from TOML or JSON and are validated before use; the built-in
//! set is available through [`ConfigTables::builtin`].

#![deny(unsafe_code)]

pub mod affinity;
pub mod builtin;
pub mod compatibility;
pub mod conversion;
pub mod hexagram;
pub mod layout;
pub mod tables;
pub mod validation;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use affinity::{CategoryAffinity, KeywordAffinity};
pub use compatibility::{CompatibilityEntry, CompatibilityTable};
pub use conversion::{category_prefix, ConversionMatrix};
pub use hexagram::{ArchetypeCatalog, ArchetypeEntry, HexagramMatrix, ARCHETYPE_COUNT};
pub use layout::QuestionnaireLayout;
pub use tables::ConfigTables;
pub use validation::{validate_tables, TableIssue, TableValidation};
