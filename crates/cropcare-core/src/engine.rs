//! Recommendation Engine.
//!
//! Classifies a feature vector, keeps the three most probable crops, and
//! attaches catalog metadata to each. The engine is a pure function of its
//! (immutable) classifier and reference data, so one instance serves every
//! request concurrently.

use std::sync::Arc;

use cropcare_reference::ReferenceData;
use cropcare_types::{CropRecommendation, FeatureVector, RecommendationResult};
use tracing::debug;

use crate::classifier::{Classifier, ClassifierError, rank_order};

/// Maximum number of ranked recommendations returned.
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Errors that can occur while producing a recommendation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No classifier was loaded at startup.
    #[error("Model not loaded")]
    ModelUnavailable,

    /// The classifier produced inconsistent output.
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The classifier has no classes, so there is nothing to recommend.
    #[error("classifier produced an empty distribution")]
    EmptyDistribution,

    /// A probability was NaN or infinite, typically because an extreme
    /// input overflowed the model arithmetic.
    #[error("classifier produced a non-finite probability for {label}")]
    NonFiniteProbability {
        /// The class whose probability was not finite.
        label: String,
    },
}

/// Ranks classifier output and joins it with crop metadata.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    classifier: Option<Arc<dyn Classifier>>,
    reference: Arc<ReferenceData>,
}

impl RecommendationEngine {
    /// Create an engine. `classifier` is `None` when the model failed to
    /// load; every recommendation then fails with
    /// [`EngineError::ModelUnavailable`].
    pub fn new(classifier: Option<Arc<dyn Classifier>>, reference: Arc<ReferenceData>) -> Self {
        Self {
            classifier,
            reference,
        }
    }

    /// Whether a classifier is available.
    pub const fn is_model_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Produce the ranked recommendation for `features`.
    ///
    /// The result holds `min(3, class count)` entries in descending
    /// probability order (ties by label ascending). The primary
    /// recommendation is entry 0 and its confidence is the distribution
    /// maximum. Crops without catalog metadata get `N/A` fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ModelUnavailable`] without a classifier,
    /// [`EngineError::Classifier`] for inconsistent classifier output,
    /// [`EngineError::NonFiniteProbability`] if any probability is NaN or
    /// infinite, and [`EngineError::EmptyDistribution`] for a classifier
    /// with no classes.
    pub fn recommend(&self, features: &FeatureVector) -> Result<RecommendationResult, EngineError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(EngineError::ModelUnavailable)?;

        let classification = classifier.classify(features)?;
        if let Some(bad) = classification
            .distribution
            .iter()
            .find(|class| !class.probability.is_finite())
        {
            return Err(EngineError::NonFiniteProbability {
                label: bad.label.clone(),
            });
        }

        let mut ranked = classification.distribution;
        ranked.sort_by(rank_order);
        ranked.truncate(TOP_RECOMMENDATIONS);

        let all_recommendations: Vec<CropRecommendation> = ranked
            .into_iter()
            .map(|class| CropRecommendation {
                metadata: self.reference.crops.metadata_or_unavailable(&class.label),
                crop: class.label,
                confidence: class.probability,
            })
            .collect();

        let primary = all_recommendations
            .first()
            .ok_or(EngineError::EmptyDistribution)?;

        debug!(
            primary = %primary.crop,
            confidence = primary.confidence,
            ranked = all_recommendations.len(),
            "Recommendation computed"
        );

        Ok(RecommendationResult {
            primary_recommendation: primary.crop.clone(),
            confidence: primary.confidence,
            all_recommendations,
        })
    }
}
