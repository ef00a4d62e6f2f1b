//! The complete, versioned set of configuration tables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use triad_types::{Facet, Trigram, TriadError, TriadResult};

use crate::affinity::{CategoryAffinity, KeywordAffinity};
use crate::builtin;
use crate::compatibility::CompatibilityTable;
use crate::conversion::ConversionMatrix;
use crate::hexagram::{ArchetypeCatalog, HexagramMatrix};
use crate::layout::QuestionnaireLayout;
use crate::validation::{validate_tables, TableValidation};

/// Static data parameterizing the whole pipeline.
///
/// Loaded once and shared read-only by every component. Scalar fields come
/// first so the TOML form keeps plain values ahead of tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigTables {
    pub version: String,
    /// Dominant-drive dimension keys (`<category>_<trait>`).
    pub drive_dimensions: Vec<String>,
    /// Unordered pairs with a fixed `[upper, lower]` ordering.
    #[serde(default)]
    pub fixed_orientations: Vec<[Trigram; 2]>,
    pub layout: QuestionnaireLayout,
    pub social_matrix: ConversionMatrix,
    pub stress_matrix: ConversionMatrix,
    pub hexagrams: HexagramMatrix,
    pub category_affinity: CategoryAffinity,
    #[serde(default)]
    pub keyword_affinity: KeywordAffinity,
    #[serde(default)]
    pub compatibility: CompatibilityTable,
    pub archetypes: ArchetypeCatalog,
}

impl ConfigTables {
    /// The built-in representative tables.
    pub fn builtin() -> Self {
        Self {
            version: builtin::BUILTIN_VERSION.to_string(),
            drive_dimensions: builtin::drive_dimensions(),
            fixed_orientations: builtin::fixed_orientations(),
            layout: QuestionnaireLayout::standard(),
            social_matrix: builtin::social_matrix(),
            stress_matrix: builtin::stress_matrix(),
            hexagrams: builtin::hexagram_matrix(),
            category_affinity: builtin::category_affinity(),
            keyword_affinity: builtin::keyword_affinity(),
            compatibility: builtin::compatibility_table(),
            archetypes: builtin::archetype_catalog(),
        }
    }

    /// Parse and validate tables from TOML.
    pub fn from_toml_str(content: &str) -> TriadResult<Self> {
        let tables: Self =
            toml::from_str(content).map_err(|e| TriadError::ConfigParse(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Read, parse, and validate a TOML or JSON file (by extension; TOML otherwise).
    pub fn from_file(path: impl AsRef<Path>) -> TriadResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TriadError::Io(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loading configuration tables");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Parse and validate tables from JSON.
    pub fn from_json_str(content: &str) -> TriadResult<Self> {
        let tables: Self =
            serde_json::from_str(content).map_err(|e| TriadError::ConfigParse(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn to_toml_string(&self) -> TriadResult<String> {
        toml::to_string_pretty(self).map_err(|e| TriadError::ConfigParse(e.to_string()))
    }

    pub fn to_json_string(&self) -> TriadResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TriadError::ConfigParse(e.to_string()))
    }

    /// Full validation report.
    pub fn validation(&self) -> TableValidation {
        validate_tables(self)
    }

    /// Fail with `InvalidTables` on any error; warnings are logged.
    pub fn validate(&self) -> TriadResult<()> {
        let result = self.validation();
        for issue in &result.warnings {
            warn!(version = %self.version, code = %issue.code, "{}", issue.message);
        }
        if result.is_valid() {
            debug!(version = %self.version, "configuration tables validated");
            Ok(())
        } else {
            Err(TriadError::InvalidTables(result.summary()))
        }
    }

    /// Conversion matrix of a non-canonical facet.
    pub fn conversion_for(&self, facet: Facet) -> Option<&ConversionMatrix> {
        match facet {
            Facet::DominantDrive => None,
            Facet::SocialPresentation => Some(&self.social_matrix),
            Facet::StressResponse => Some(&self.stress_matrix),
        }
    }

    /// Dimension names a facet's raw vector is keyed by.
    pub fn dimensions_for(&self, facet: Facet) -> &[String] {
        match self.conversion_for(facet) {
            Some(matrix) => &matrix.dimensions,
            None => &self.drive_dimensions,
        }
    }

    /// Fixed `(upper, lower)` ordering for an unordered pair, if the tables impose one.
    pub fn fixed_orientation(&self, a: Trigram, b: Trigram) -> Option<(Trigram, Trigram)> {
        self.fixed_orientations
            .iter()
            .find(|[u, l]| (*u == a && *l == b) || (*u == b && *l == a))
            .map(|[u, l]| (*u, *l))
    }
}

impl Default for ConfigTables {
    fn default() -> Self {
        Self::builtin()
    }
}
