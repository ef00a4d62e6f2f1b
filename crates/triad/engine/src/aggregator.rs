//! Sums scoring tags into one facet-basis vector per facet.

use tracing::{debug, warn};
use triad_tables::ConfigTables;
use triad_types::{DimensionVector, Facet, MalformedAnswer, MalformedReason};

use crate::input::ResolvedAnswers;

/// The three raw vectors plus every tag that had to be skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedVectors {
    vectors: [DimensionVector; 3],
    pub warnings: Vec<MalformedAnswer>,
}

impl AggregatedVectors {
    pub fn get(&self, facet: Facet) -> &DimensionVector {
        &self.vectors[facet.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionVector> {
        self.vectors.iter()
    }
}

/// Accumulates tag weights by dimension name.
pub struct VectorAggregator<'t> {
    tables: &'t ConfigTables,
}

impl<'t> VectorAggregator<'t> {
    pub fn new(tables: &'t ConfigTables) -> Self {
        Self { tables }
    }

    /// Zero vector over a facet's configured dimensions.
    pub fn empty_vector(&self, facet: Facet) -> DimensionVector {
        DimensionVector::new(facet, self.tables.dimensions_for(facet))
    }

    /// Add every tag to the vector of its record's facet.
    ///
    /// Tags naming an unknown dimension, or carrying a negative or non-finite
    /// weight, are skipped and reported.
    pub fn aggregate(&self, answers: &ResolvedAnswers<'_>) -> AggregatedVectors {
        let mut vectors = Facet::ALL.map(|f| self.empty_vector(f));
        let mut warnings = Vec::new();

        for (facet, record) in answers.iter() {
            let vector = &mut vectors[facet.index()];
            for tag in &record.scoring_tags {
                let reason = if !tag.weight.is_finite() || tag.weight < 0.0 {
                    Some(MalformedReason::InvalidWeight)
                } else if !vector.add(&tag.category, tag.weight) {
                    Some(MalformedReason::UnknownDimension)
                } else {
                    None
                };

                if let Some(reason) = reason {
                    warn!(
                        question = %record.question_id,
                        facet = %facet,
                        category = %tag.category,
                        weight = tag.weight,
                        %reason,
                        "skipping malformed scoring tag"
                    );
                    warnings.push(MalformedAnswer {
                        question_id: record.question_id.clone(),
                        facet,
                        category: tag.category.clone(),
                        weight: tag.weight,
                        reason,
                    });
                }
            }
        }

        for vector in &vectors {
            debug!(facet = %vector.facet, total = vector.total(), "aggregated facet vector");
        }
        AggregatedVectors { vectors, warnings }
    }
}
