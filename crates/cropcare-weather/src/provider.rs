//! Per-state weather lookup.
//!
//! [`WeatherProvider`] resolves a state to its representative city through
//! the shared [`ReferenceData`] and dispatches to the mock formula or the
//! live client.

use std::sync::Arc;

use cropcare_reference::ReferenceData;
use cropcare_types::WeatherReading;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::live::LiveWeatherClient;

/// Latitude at which the mock formula yields its base temperature.
const MOCK_BASE_LATITUDE: f64 = 20.0;
/// Mock temperature at [`MOCK_BASE_LATITUDE`], in °C.
const MOCK_BASE_TEMPERATURE: f64 = 25.0;
/// Mock temperature change per degree of latitude.
const MOCK_DEGREES_PER_LATITUDE: f64 = 0.5;
/// Mock relative humidity, in percent.
const MOCK_HUMIDITY: f64 = 65.0;
/// Mock monthly rainfall, in millimetres.
const MOCK_RAINFALL: f64 = 150.0;

/// Deterministic weather for a latitude, used when no live provider is
/// configured.
///
/// `temperature = 25.0 + (latitude - 20) * 0.5`, humidity 65 %, rainfall
/// 150 mm.
pub fn mock_reading(latitude: f64) -> WeatherReading {
    WeatherReading {
        temperature: (latitude - MOCK_BASE_LATITUDE)
            .mul_add(MOCK_DEGREES_PER_LATITUDE, MOCK_BASE_TEMPERATURE),
        humidity: MOCK_HUMIDITY,
        rainfall: MOCK_RAINFALL,
    }
}

/// Where weather readings come from.
///
/// Uses enum dispatch instead of a trait object because the live source is
/// async.
#[derive(Debug, Clone)]
pub enum WeatherSource {
    /// Latitude formula; no network.
    Mock,
    /// `OpenWeatherMap`-compatible HTTP API.
    Live(LiveWeatherClient),
}

impl WeatherSource {
    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Live(_) => "live",
        }
    }
}

/// Weather lookup by state name.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    source: WeatherSource,
    reference: Arc<ReferenceData>,
}

impl WeatherProvider {
    /// Create a provider with an explicit source.
    pub const fn new(source: WeatherSource, reference: Arc<ReferenceData>) -> Self {
        Self { source, reference }
    }

    /// Create a mock provider.
    pub const fn mock(reference: Arc<ReferenceData>) -> Self {
        Self::new(WeatherSource::Mock, reference)
    }

    /// Create a provider from configuration: live when a real API key is
    /// configured, mock otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Client`] if the live HTTP client cannot be
    /// built.
    pub fn from_config(
        config: &WeatherConfig,
        reference: Arc<ReferenceData>,
    ) -> Result<Self, WeatherError> {
        let source = LiveWeatherClient::from_config(config)?
            .map_or(WeatherSource::Mock, WeatherSource::Live);
        Ok(Self::new(source, reference))
    }

    /// The active source.
    pub const fn source(&self) -> &WeatherSource {
        &self.source
    }

    /// Fetch the current reading for `state`.
    ///
    /// Failures are logged here with their cause; callers only need to know
    /// the reading is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::UnknownRegion`] if `state` is not a known
    /// region, or any live-client error in live mode.
    pub async fn fetch(&self, state: &str) -> Result<WeatherReading, WeatherError> {
        let Some(region) = self.reference.regions.get(state) else {
            debug!(state, "Weather requested for unknown region");
            return Err(WeatherError::UnknownRegion(state.to_owned()));
        };

        match &self.source {
            WeatherSource::Mock => Ok(mock_reading(region.latitude)),
            WeatherSource::Live(client) => {
                let result = client.current(region).await;
                if let Err(e) = &result {
                    warn!(state, city = %region.city, error = %e, "Weather fetch failed");
                }
                result
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mock_at_base_latitude() {
        let reading = mock_reading(20.0);
        assert_eq!(reading.temperature, 25.0);
        assert_eq!(reading.humidity, 65.0);
        assert_eq!(reading.rainfall, 150.0);
    }

    #[tokio::test]
    async fn mock_for_haryana() {
        let provider = WeatherProvider::mock(Arc::new(ReferenceData::builtin()));
        let reading = provider.fetch("Haryana").await.unwrap();
        assert!((reading.temperature - 30.366_65).abs() < 1e-9);
        assert_eq!(reading.humidity, 65.0);
        assert_eq!(reading.rainfall, 150.0);
    }

    #[tokio::test]
    async fn mock_rejects_unknown_state() {
        let provider = WeatherProvider::mock(Arc::new(ReferenceData::builtin()));
        let result = provider.fetch("Atlantis").await;
        assert!(matches!(result, Err(WeatherError::UnknownRegion(s)) if s == "Atlantis"));
    }

    #[test]
    fn default_config_selects_mock() {
        let provider = WeatherProvider::from_config(
            &WeatherConfig::default(),
            Arc::new(ReferenceData::builtin()),
        )
        .unwrap();
        assert_eq!(provider.source().name(), "mock");
    }
}
