//! Weather provider configuration.
//!
//! Lives under the `weather:` key of `cropcare-config.yaml`. The live
//! provider is only used when a real API key is present.

use serde::Deserialize;

/// Default `OpenWeatherMap` current-weather endpoint.
pub const DEFAULT_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Default per-request timeout for the live provider (5 seconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// API key value shipped in sample configs. Treated the same as no key.
pub const PLACEHOLDER_API_KEY: &str = "your_openweather_api_key";

/// Weather provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherConfig {
    /// `OpenWeatherMap` API key. Absent, empty, or the placeholder selects
    /// mock mode.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Current-weather endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl WeatherConfig {
    /// The API key to use for live requests, or `None` for mock mode.
    pub fn live_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Whether this configuration selects the live provider.
    pub fn is_live(&self) -> bool {
        self.live_api_key().is_some()
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mock() {
        let config = WeatherConfig::default();
        assert!(!config.is_live());
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn placeholder_and_blank_keys_are_mock() {
        for key in [PLACEHOLDER_API_KEY, "", "   "] {
            let config = WeatherConfig {
                api_key: Some(key.to_owned()),
                ..WeatherConfig::default()
            };
            assert!(!config.is_live(), "key {key:?} should select mock mode");
        }
    }

    #[test]
    fn real_key_is_live() {
        let config = WeatherConfig {
            api_key: Some(String::from("abc123")),
            ..WeatherConfig::default()
        };
        assert_eq!(config.live_api_key(), Some("abc123"));
    }
}
