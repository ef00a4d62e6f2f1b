//! Engine tunables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use triad_types::{InteractionLabel, SelectionPolicy, TriadError, TriadResult};

/// Weights combining the two orientation scores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationWeights {
    /// Weight of the keyword evidence score.
    pub keyword: f64,
    /// Weight of the category affinity score.
    pub affinity: f64,
}

impl Default for OrientationWeights {
    fn default() -> Self {
        Self {
            keyword: 0.7,
            affinity: 0.3,
        }
    }
}

/// Lower bounds of the interaction label bands.
///
/// `score >= synergy` is [`InteractionLabel::Synergy`], `>= harmony` is
/// harmonious, `>= neutral` is neutral, and anything lower is tense.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBands {
    pub synergy: f64,
    pub harmony: f64,
    pub neutral: f64,
}

impl ScoreBands {
    pub fn label(&self, score: f64) -> InteractionLabel {
        if score >= self.synergy {
            InteractionLabel::Synergy
        } else if score >= self.harmony {
            InteractionLabel::Harmony
        } else if score >= self.neutral {
            InteractionLabel::Neutral
        } else {
            InteractionLabel::Tension
        }
    }
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            synergy: 0.6,
            harmony: 0.2,
            neutral: -0.2,
        }
    }
}

/// Interaction scoring parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Weight of the cosine similarity of two facet vectors.
    pub similarity_weight: f64,
    /// Weight of the archetype compatibility.
    pub compatibility_weight: f64,
    /// Compatibility used when the table has no entry for a pair.
    pub neutral_compatibility: f64,
    pub bands: ScoreBands,
    /// Concentration spread between facets above which the profile is flagged as imbalanced.
    pub imbalance_threshold: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            similarity_weight: 0.5,
            compatibility_weight: 0.5,
            neutral_compatibility: 0.0,
            bands: ScoreBands::default(),
            imbalance_threshold: 0.5,
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How the two dominant trigrams are chosen (default: dominance threshold 0.5).
    pub selection_policy: SelectionPolicy,
    pub orientation_weights: OrientationWeights,
    pub interaction: InteractionConfig,
    /// Evaluate both orientation candidates in parallel (needs the `parallel` feature).
    pub parallel_orientation: bool,
}

impl EngineConfig {
    /// Parse and validate from TOML; missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> TriadResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TriadError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> TriadResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TriadError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> TriadResult<String> {
        toml::to_string_pretty(self).map_err(|e| TriadError::ConfigParse(e.to_string()))
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    pub fn validate(&self) -> TriadResult<()> {
        let invalid = |msg: String| Err(TriadError::ConfigParse(msg));

        if let SelectionPolicy::DominanceThreshold { margin } = self.selection_policy {
            if !(0.0..=1.0).contains(&margin) {
                return invalid(format!("dominance margin {margin} is outside [0, 1]"));
            }
        }
        let weights = [
            ("orientation keyword", self.orientation_weights.keyword),
            ("orientation affinity", self.orientation_weights.affinity),
            ("similarity", self.interaction.similarity_weight),
            ("compatibility", self.interaction.compatibility_weight),
            ("imbalance threshold", self.interaction.imbalance_threshold),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return invalid(format!("{name} weight {weight} must be finite and non-negative"));
            }
        }
        if !self.interaction.neutral_compatibility.is_finite() {
            return invalid("neutral compatibility must be finite".to_string());
        }
        let bands = &self.interaction.bands;
        if !(bands.synergy >= bands.harmony && bands.harmony >= bands.neutral) {
            return invalid(format!(
                "score bands must descend: synergy {} ≥ harmony {} ≥ neutral {}",
                bands.synergy, bands.harmony, bands.neutral
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = EngineConfig::default();
        assert_eq!(
            cfg.selection_policy,
            SelectionPolicy::DominanceThreshold { margin: 0.5 }
        );
        assert!((cfg.orientation_weights.keyword - 0.7).abs() < f64::EPSILON);
        assert!((cfg.orientation_weights.affinity - 0.3).abs() < f64::EPSILON);
        assert!((cfg.interaction.similarity_weight - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.interaction.neutral_compatibility, 0.0);
        assert!(!cfg.parallel_orientation);
        cfg.validate().unwrap();
    }

    #[test]
    fn bands_label_scores() {
        let bands = ScoreBands::default();
        assert_eq!(bands.label(0.75), InteractionLabel::Synergy);
        assert_eq!(bands.label(0.6), InteractionLabel::Synergy);
        assert_eq!(bands.label(0.3), InteractionLabel::Harmony);
        assert_eq!(bands.label(0.0), InteractionLabel::Neutral);
        assert_eq!(bands.label(-0.2), InteractionLabel::Neutral);
        assert_eq!(bands.label(-0.5), InteractionLabel::Tension);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg = EngineConfig::from_toml_str(
            r#"
            parallel_orientation = true

            [selection_policy]
            kind = "distinct-pair"

            [interaction.bands]
            synergy = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.selection_policy, SelectionPolicy::DistinctPair);
        assert!(cfg.parallel_orientation);
        assert!((cfg.interaction.bands.synergy - 0.7).abs() < f64::EPSILON);
        assert!((cfg.interaction.bands.harmony - 0.2).abs() < f64::EPSILON);
        assert!((cfg.orientation_weights.keyword - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_threshold_policy() {
        let cfg = EngineConfig::from_toml_str(
            r#"
            [selection_policy]
            kind = "dominance-threshold"
            margin = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.selection_policy,
            SelectionPolicy::DominanceThreshold { margin: 0.25 }
        );
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = EngineConfig::default()
            .with_policy(SelectionPolicy::DominanceThreshold { margin: 1.5 });
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.orientation_weights.keyword = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.interaction.bands.harmony = 0.9;
        assert!(matches!(cfg.validate(), Err(TriadError::ConfigParse(_))));

        let mut cfg = EngineConfig::default();
        cfg.interaction.imbalance_threshold = f64::NAN;
        assert!(cfg.validate().is_err());

        assert!(EngineConfig::from_toml_str("parallel_orientation = 3").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            EngineConfig::from_file("/nonexistent/triad-engine.toml"),
            Err(TriadError::Io(_))
        ));
    }
}
