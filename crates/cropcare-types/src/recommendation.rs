//! Ranked crop recommendations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::features::{SoilProfile, WeatherReading};
use crate::reference::CropMetadata;

/// One ranked crop suggestion with its probability and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropRecommendation {
    /// Crop label as reported by the classifier.
    pub crop: String,
    /// Classifier probability for this crop, in `[0, 1]`.
    pub confidence: f64,
    /// Catalog metadata, or `N/A` fields when the crop is not catalogued.
    #[serde(flatten)]
    pub metadata: CropMetadata,
}

/// Output of the recommendation engine for one feature vector.
///
/// `all_recommendations` is ordered by descending confidence and the primary
/// recommendation is always its first entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecommendationResult {
    /// Label of the highest-probability crop.
    pub primary_recommendation: String,
    /// Probability of the primary recommendation.
    pub confidence: f64,
    /// Up to three ranked suggestions.
    pub all_recommendations: Vec<CropRecommendation>,
}

impl RecommendationResult {
    /// The rank-0 entry, if the classifier produced any classes at all.
    pub fn primary(&self) -> Option<&CropRecommendation> {
        self.all_recommendations.first()
    }
}

/// Weather and soil conditions that fed a regional recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionalConditions {
    /// Weather reading for the region's representative city.
    pub weather: WeatherReading,
    /// Default soil profile for the region.
    pub soil: SoilProfile,
}

/// A recommendation computed for a named region from estimated conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionalRecommendation {
    /// State name.
    pub state: String,
    /// Representative city of the state.
    pub city: String,
    /// Ranked recommendations.
    #[serde(flatten)]
    pub result: RecommendationResult,
    /// Inputs the recommendation was derived from.
    pub conditions: RegionalConditions,
    /// When the recommendation was generated.
    pub timestamp: DateTime<Utc>,
}
