//! The final analysis report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedAnswer, TriadError, TriadResult};
use crate::facet::Facet;
use crate::interaction::InteractionResult;
use crate::profile::{FacetProfile, SelectionPolicy};

/// Everything one analysis run produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Version string of the tables used.
    pub tables_version: String,
    /// Selection policy in effect.
    pub policy: SelectionPolicy,
    pub profiles: BTreeMap<Facet, FacetProfile>,
    pub interaction: InteractionResult,
    /// Scoring tags skipped during aggregation.
    #[serde(default)]
    pub warnings: Vec<MalformedAnswer>,
}

impl AnalysisReport {
    pub fn profile(&self, facet: Facet) -> Option<&FacetProfile> {
        self.profiles.get(&facet)
    }

    /// Archetype ids in `Facet::ALL` order.
    pub fn archetype_ids(&self) -> Vec<u8> {
        Facet::ALL
            .iter()
            .filter_map(|f| self.profiles.get(f).map(|p| p.archetype_id))
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn to_json_pretty(&self) -> TriadResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TriadError::ConfigParse(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> TriadResult<Self> {
        serde_json::from_str(json).map_err(|e| TriadError::ConfigParse(e.to_string()))
    }
}
