//! The pipeline facade.
//!
//! `TriadEngine` runs, in order: input validation → aggregation → unification
//! → normalization → selection → orientation → archetype lookup, once per
//! facet, and then the pairwise interaction analysis.

use std::collections::BTreeMap;

use tracing::{debug, info};
use triad_tables::ConfigTables;
use triad_types::{
    AnalysisReport, DimensionVector, Facet, FacetProfile, OrientationSource, RawAnswerRecord,
    SelectionPolicy, TriadResult,
};

use crate::aggregator::VectorAggregator;
use crate::config::EngineConfig;
use crate::direction::DirectionResolver;
use crate::input::{resolve_answers, AnalysisInput, EvidenceContext};
use crate::interaction::InteractionAnalyzer;
use crate::mapper::HexagramMapper;
use crate::normalizer::VectorNormalizer;
use crate::selector::{Selection, TrigramSelector};
use crate::unifier::DimensionUnifier;

/// Deterministic classification engine over a shared set of tables.
///
/// Holds no per-run state; one engine can analyze any number of respondents,
/// from any number of threads.
pub struct TriadEngine<'t> {
    tables: &'t ConfigTables,
    config: EngineConfig,
}

impl<'t> TriadEngine<'t> {
    /// Create an engine, rejecting invalid configuration.
    pub fn new(tables: &'t ConfigTables, config: EngineConfig) -> TriadResult<Self> {
        config.validate()?;
        debug!(
            tables = %tables.version,
            policy = %config.selection_policy,
            "triad engine configured"
        );
        Ok(Self { tables, config })
    }

    /// Engine with the default configuration.
    pub fn with_defaults(tables: &'t ConfigTables) -> Self {
        Self {
            tables,
            config: EngineConfig::default(),
        }
    }

    pub fn tables(&self) -> &'t ConfigTables {
        self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The active selection policy.
    pub fn policy(&self) -> SelectionPolicy {
        self.config.selection_policy
    }

    /// Analyze answers with no extra evidence text.
    pub fn analyze_answers(&self, answers: &[RawAnswerRecord]) -> TriadResult<AnalysisReport> {
        self.run(answers, &BTreeMap::new())
    }

    /// Run the whole pipeline for one respondent.
    pub fn analyze(&self, input: &AnalysisInput) -> TriadResult<AnalysisReport> {
        self.run(&input.answers, &input.context)
    }

    fn run(
        &self,
        answers: &[RawAnswerRecord],
        context: &BTreeMap<Facet, String>,
    ) -> TriadResult<AnalysisReport> {
        let resolved = resolve_answers(answers, &self.tables.layout)?;
        let aggregated = VectorAggregator::new(self.tables).aggregate(&resolved);

        let evidence = |facet: Facet| {
            EvidenceContext::for_facet(
                &resolved,
                facet,
                context.get(&facet).map(String::as_str),
            )
        };
        let [drive, social, stress] = Facet::ALL;
        let profiles = [
            self.profile_facet(aggregated.get(drive), &evidence(drive))?,
            self.profile_facet(aggregated.get(social), &evidence(social))?,
            self.profile_facet(aggregated.get(stress), &evidence(stress))?,
        ];

        let interaction =
            InteractionAnalyzer::new(self.tables, self.config.interaction).analyze(&profiles)?;

        info!(
            drive = profiles[0].archetype_id,
            social = profiles[1].archetype_id,
            stress = profiles[2].archetype_id,
            mean_score = interaction.mean_score,
            warnings = aggregated.warnings.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            tables_version: self.tables.version.clone(),
            policy: self.config.selection_policy,
            profiles: profiles.into_iter().map(|p| (p.facet, p)).collect(),
            interaction,
            warnings: aggregated.warnings,
        })
    }

    /// Unify, normalize, select, orient, and map one facet's raw vector.
    pub fn profile_facet(
        &self,
        raw: &DimensionVector,
        evidence: &EvidenceContext,
    ) -> TriadResult<FacetProfile> {
        let facet = raw.facet;
        let raw_vector = DimensionUnifier::new(self.tables).unify(raw)?;
        let canonical_vector = VectorNormalizer::new().normalize(&raw_vector);

        let (upper, lower, orientation) =
            match TrigramSelector::new(self.config.selection_policy).select(&canonical_vector) {
                Selection::Pure(t) => (t, t, OrientationSource::Pure),
                Selection::Pair { first, second } => {
                    let o = DirectionResolver::new(self.tables, self.config.orientation_weights)
                        .with_parallel(self.config.parallel_orientation)
                        .resolve(facet, first, second, evidence);
                    (o.upper, o.lower, o.source)
                }
            };

        let mapper = HexagramMapper::new(self.tables);
        let archetype_id = mapper.map(upper, lower);
        let archetype_name = mapper.name(archetype_id)?.to_string();
        debug!(
            facet = %facet,
            %upper,
            %lower,
            archetype = archetype_id,
            name = %archetype_name,
            "facet profiled"
        );

        Ok(FacetProfile {
            facet,
            raw_vector,
            canonical_vector,
            upper,
            lower,
            is_pure: upper == lower,
            archetype_id,
            archetype_name,
            orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triad_types::{ScoringTag, TriadError, Trigram};

    fn drive_only_answers(tag: &str) -> Vec<RawAnswerRecord> {
        (1..=36)
            .map(|n| {
                let tags = if n <= 24 {
                    vec![ScoringTag::new(tag, 1.0)]
                } else {
                    Vec::new()
                };
                RawAnswerRecord::new(format!("q{n}"), "", tags)
            })
            .collect()
    }

    #[test]
    fn unanswered_facets_fall_back_to_uniform() {
        let tables = ConfigTables::builtin();
        let engine = TriadEngine::with_defaults(&tables);
        let report = engine.analyze_answers(&drive_only_answers("li_expression")).unwrap();

        let drive = report.profile(Facet::DominantDrive).unwrap();
        assert!(drive.is_pure);
        assert_eq!((drive.upper, drive.lower), (Trigram::Li, Trigram::Li));
        assert_eq!(drive.archetype_id, 30);
        assert_eq!(drive.archetype_name, "The Clinging");
        assert_eq!(drive.orientation, OrientationSource::Pure);

        let social = report.profile(Facet::SocialPresentation).unwrap();
        assert_eq!(social.canonical_vector, triad_types::CanonicalVector::uniform());
        assert!(!social.is_pure);
        assert_eq!(social.raw_vector.sum(), 0.0);
    }

    #[test]
    fn incomplete_input_fails_fast() {
        let tables = ConfigTables::builtin();
        let engine = TriadEngine::with_defaults(&tables);
        let mut answers = drive_only_answers("li_expression");
        answers.truncate(20);
        assert!(matches!(
            engine.analyze_answers(&answers),
            Err(TriadError::IncompleteAnswers {
                expected: 36,
                received: 20
            })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let tables = ConfigTables::builtin();
        let policy = SelectionPolicy::DominanceThreshold { margin: -1.0 };
        let config = EngineConfig::default().with_policy(policy);
        assert!(TriadEngine::new(&tables, config).is_err());
    }

    #[test]
    fn report_records_policy_and_version() {
        let tables = ConfigTables::builtin();
        let config = EngineConfig::default().with_policy(SelectionPolicy::DistinctPair);
        let engine = TriadEngine::new(&tables, config).unwrap();
        let report = engine.analyze_answers(&drive_only_answers("kun_receptivity")).unwrap();
        assert_eq!(report.policy, SelectionPolicy::DistinctPair);
        assert_eq!(report.tables_version, "builtin-1");
        assert!(report.profiles.values().all(|p| !p.is_pure));
    }

    #[test]
    fn borrowed_answers_match_owned_input() {
        let tables = ConfigTables::builtin();
        let engine = TriadEngine::with_defaults(&tables);
        let answers = drive_only_answers("zhen_action");
        let borrowed = engine.analyze_answers(&answers).unwrap();
        let owned = engine.analyze(&AnalysisInput::new(answers)).unwrap();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<TriadEngine<'static>>();
    }
}
