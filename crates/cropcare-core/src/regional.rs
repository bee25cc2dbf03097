//! Region recommendation orchestration.
//!
//! Resolves a state name to weather and soil estimates, builds the feature
//! vector, and hands it to the [`RecommendationEngine`]. Steps run in a
//! fixed order and the first failure ends the request:
//!
//! 1. Unknown state → [`RegionalError::NotFound`]
//! 2. Weather fetch failure → [`RegionalError::WeatherUnavailable`]
//! 3. Soil estimate (infallible)
//! 4. Engine failure (for example no model) → [`RegionalError::Engine`]

use std::sync::Arc;

use chrono::Utc;
use cropcare_reference::ReferenceData;
use cropcare_types::{
    FeatureVector, Region, RegionalConditions, RegionalRecommendation, WeatherReading,
};
use cropcare_weather::{WeatherError, WeatherProvider};
use tracing::{debug, info};

use crate::engine::{EngineError, RecommendationEngine};

/// Errors that can occur while producing a regional recommendation.
#[derive(Debug, thiserror::Error)]
pub enum RegionalError {
    /// The state is not in the region table.
    #[error("State not found: {0}")]
    NotFound(String),

    /// The weather provider failed or timed out.
    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(WeatherError),

    /// The recommendation engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Produces recommendations for named regions.
#[derive(Debug, Clone)]
pub struct RegionalAdvisor {
    engine: Arc<RecommendationEngine>,
    weather: WeatherProvider,
    reference: Arc<ReferenceData>,
}

impl RegionalAdvisor {
    /// Create an advisor from its collaborators.
    pub const fn new(
        engine: Arc<RecommendationEngine>,
        weather: WeatherProvider,
        reference: Arc<ReferenceData>,
    ) -> Self {
        Self {
            engine,
            weather,
            reference,
        }
    }

    /// Look up `state` and fetch its current weather.
    ///
    /// # Errors
    ///
    /// Returns [`RegionalError::NotFound`] for an unknown state and
    /// [`RegionalError::WeatherUnavailable`] if the provider fails.
    pub async fn weather_for_region(
        &self,
        state: &str,
    ) -> Result<(Region, WeatherReading), RegionalError> {
        let region = self
            .reference
            .regions
            .get(state)
            .ok_or_else(|| RegionalError::NotFound(state.to_owned()))?;

        let reading = self
            .weather
            .fetch(state)
            .await
            .map_err(|e| match e {
                WeatherError::UnknownRegion(name) => RegionalError::NotFound(name),
                other => RegionalError::WeatherUnavailable(other),
            })?;

        Ok((region.clone(), reading))
    }

    /// Recommend crops for `state` from its estimated conditions.
    ///
    /// # Errors
    ///
    /// See the module documentation for the failure order.
    pub async fn recommend_for_region(
        &self,
        state: &str,
    ) -> Result<RegionalRecommendation, RegionalError> {
        let (region, weather) = self.weather_for_region(state).await?;
        let soil = self.reference.soil.estimate(state);
        debug!(state, ?weather, ?soil, "Regional conditions estimated");

        let features = FeatureVector::from_conditions(&soil, &weather);
        let result = self.engine.recommend(&features)?;

        info!(
            state,
            city = %region.city,
            primary = %result.primary_recommendation,
            confidence = result.confidence,
            "Regional recommendation generated"
        );

        Ok(RegionalRecommendation {
            state: region.state,
            city: region.city,
            result,
            conditions: RegionalConditions { weather, soil },
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;

    /// Puts all mass on "rice" when rainfall is high, else on "wheat".
    #[derive(Debug)]
    struct RainSensitive {
        classes: Vec<String>,
    }

    impl Classifier for RainSensitive {
        fn classes(&self) -> &[String] {
            &self.classes
        }

        fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
            if features.rainfall > 100.0 {
                vec![0.8, 0.2]
            } else {
                vec![0.2, 0.8]
            }
        }
    }

    fn advisor(with_model: bool) -> RegionalAdvisor {
        let reference = Arc::new(ReferenceData::builtin());
        let classifier: Option<Arc<dyn Classifier>> = with_model.then(|| {
            Arc::new(RainSensitive {
                classes: vec!["rice".to_owned(), "wheat".to_owned()],
            }) as Arc<dyn Classifier>
        });
        let engine = Arc::new(RecommendationEngine::new(classifier, Arc::clone(&reference)));
        let weather = WeatherProvider::mock(Arc::clone(&reference));
        RegionalAdvisor::new(engine, weather, reference)
    }

    #[tokio::test]
    async fn punjab_uses_its_soil_profile_and_mock_weather() {
        let rec = advisor(true).recommend_for_region("Punjab").await.unwrap();

        assert_eq!(rec.state, "Punjab");
        assert_eq!(rec.city, "Chandigarh");
        assert_eq!(rec.conditions.soil.n, 85.0);
        assert_eq!(rec.conditions.soil.ph, 7.2);
        assert_eq!(rec.conditions.weather.humidity, 65.0);
        assert_eq!(rec.conditions.weather.rainfall, 150.0);
        assert_eq!(rec.result.primary_recommendation, "rice");
        assert_eq!(rec.result.all_recommendations.len(), 2);
    }

    #[tokio::test]
    async fn unlisted_soil_falls_back_to_default() {
        let rec = advisor(true).recommend_for_region("Goa").await.unwrap();
        assert_eq!(rec.conditions.soil.n, 65.0);
        assert_eq!(rec.conditions.soil.k, 40.0);
        assert_eq!(rec.conditions.soil.ph, 6.8);
    }

    #[tokio::test]
    async fn unknown_state_is_not_found() {
        let result = advisor(true).recommend_for_region("Atlantis").await;
        assert!(matches!(result, Err(RegionalError::NotFound(s)) if s == "Atlantis"));
    }

    #[tokio::test]
    async fn unknown_state_wins_over_missing_model() {
        let result = advisor(false).recommend_for_region("Atlantis").await;
        assert!(matches!(result, Err(RegionalError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_model_surfaces_engine_error() {
        let result = advisor(false).recommend_for_region("Kerala").await;
        assert!(matches!(
            result,
            Err(RegionalError::Engine(EngineError::ModelUnavailable))
        ));
    }

    #[tokio::test]
    async fn weather_for_region_returns_the_region() {
        let (region, reading) = advisor(false).weather_for_region("Haryana").await.unwrap();
        assert_eq!(region.city, "Chandigarh");
        assert!((reading.temperature - 30.366_65).abs() < 1e-9);
    }
}
