//! Shared application state for the CropCare API.
//!
//! [`AppState`] bundles the recommendation engine, the regional advisor, and
//! the reference tables. It is built once at startup, wrapped in an `Arc`,
//! and never mutated afterwards.

use std::sync::Arc;

use cropcare_core::{Classifier, RecommendationEngine, RegionalAdvisor};
use cropcare_reference::ReferenceData;
use cropcare_weather::WeatherProvider;

/// Read-only state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Classifies caller-supplied feature vectors.
    pub engine: Arc<RecommendationEngine>,
    /// Produces recommendations and weather for named states.
    pub advisor: RegionalAdvisor,
    /// Region, soil, and crop tables.
    pub reference: Arc<ReferenceData>,
}

impl AppState {
    /// Assemble application state.
    ///
    /// `classifier` is `None` when the model failed to load; the service
    /// still answers reference routes and reports `model_loaded: false`.
    pub fn new(
        classifier: Option<Arc<dyn Classifier>>,
        weather: WeatherProvider,
        reference: Arc<ReferenceData>,
    ) -> Self {
        let engine = Arc::new(RecommendationEngine::new(
            classifier,
            Arc::clone(&reference),
        ));
        let advisor = RegionalAdvisor::new(Arc::clone(&engine), weather, Arc::clone(&reference));
        Self {
            engine,
            advisor,
            reference,
        }
    }

    /// State over the built-in tables with mock weather.
    pub fn with_mock_weather(classifier: Option<Arc<dyn Classifier>>) -> Self {
        let reference = Arc::new(ReferenceData::builtin());
        let weather = WeatherProvider::mock(Arc::clone(&reference));
        Self::new(classifier, weather, reference)
    }

    /// Whether a classifier is available.
    pub fn model_loaded(&self) -> bool {
        self.engine.is_model_loaded()
    }
}
