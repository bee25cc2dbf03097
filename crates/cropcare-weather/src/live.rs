//! Live weather client for `OpenWeatherMap`-compatible APIs.
//!
//! Sends `GET {api_url}?lat=..&lon=..&appid=..&units=metric` and reads
//! `main.temp`, `main.humidity` and the optional `rain["1h"]` from the
//! response. Hourly rainfall is scaled to a monthly estimate.

use std::time::Duration;

use cropcare_types::{Region, WeatherReading};

use crate::config::WeatherConfig;
use crate::error::WeatherError;

/// Hours per day times days per month, used to turn an hourly precipitation
/// rate into a monthly estimate.
pub const HOURLY_TO_MONTHLY: f64 = 24.0 * 30.0;

/// Client for the live weather endpoint.
///
/// Holds a single [`reqwest::Client`] built with the per-request timeout.
/// Each call is an independent request; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LiveWeatherClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl LiveWeatherClient {
    /// Create a client for `api_url` authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Client`] if the TLS backend cannot be
    /// initialized.
    pub fn new(api_url: &str, api_key: &str, timeout_ms: u64) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| WeatherError::Client(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.to_owned(),
            api_key: api_key.to_owned(),
            timeout_ms,
        })
    }

    /// Create a client from configuration, or `None` when the configuration
    /// selects mock mode.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &WeatherConfig) -> Result<Option<Self>, WeatherError> {
        config
            .live_api_key()
            .map(|key| Self::new(&config.api_url, key, config.timeout_ms))
            .transpose()
    }

    /// Fetch current conditions at the region's coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Timeout`] if the timeout elapses,
    /// [`WeatherError::Request`] on transport failure,
    /// [`WeatherError::Status`] on a non-2xx answer, and
    /// [`WeatherError::Parse`] if the body lacks the expected fields.
    pub async fn current(&self, region: &Region) -> Result<WeatherReading, WeatherError> {
        let query = [
            ("lat", region.latitude.to_string()),
            ("lon", region.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", String::from("metric")),
        ];

        let response = self
            .client
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                WeatherError::Parse(format!("invalid JSON body: {e}"))
            }
        })?;

        parse_current(&json)
    }

    fn request_error(&self, e: &reqwest::Error) -> WeatherError {
        if e.is_timeout() {
            WeatherError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            WeatherError::Request(e.to_string())
        }
    }
}

/// Extract a [`WeatherReading`] from a current-weather response body.
///
/// Missing `rain` (or `rain["1h"]`) means no rainfall.
///
/// # Errors
///
/// Returns [`WeatherError::Parse`] if `main.temp` or `main.humidity` is
/// missing or not a number.
pub fn parse_current(json: &serde_json::Value) -> Result<WeatherReading, WeatherError> {
    let main = json
        .get("main")
        .ok_or_else(|| WeatherError::Parse("response missing main".to_owned()))?;

    let temperature = main
        .get("temp")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| WeatherError::Parse("response missing main.temp".to_owned()))?;

    let humidity = main
        .get("humidity")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| WeatherError::Parse("response missing main.humidity".to_owned()))?;

    let hourly_rain = json
        .get("rain")
        .and_then(|rain| rain.get("1h"))
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(0.0);

    Ok(WeatherReading {
        temperature,
        humidity,
        rainfall: hourly_rain * HOURLY_TO_MONTHLY,
    })
}
