//! Configuration loading and typed config structures for the CropCare service.
//!
//! The optional configuration file is `cropcare-config.yaml` in the working
//! directory. Every field has a default, so an empty or absent file yields a
//! runnable mock-mode service on `0.0.0.0:5000`. Environment variables
//! override the file (see [`ServiceConfig::apply_env_overrides`]).

use std::path::{Path, PathBuf};

use cropcare_weather::WeatherConfig;
use serde::Deserialize;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cropcare-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidOverride {
        /// The environment variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `cropcare-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Classifier model location.
    #[serde(default)]
    pub model: ModelSettings,

    /// Weather provider settings.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    ///
    /// Environment overrides are not applied; call
    /// [`ServiceConfig::apply_env_overrides`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string. Blank input yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if a numeric variable does
    /// not parse.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Recognised variables: `CROPCARE_HOST`, `CROPCARE_PORT`,
    /// `CROPCARE_MODEL_PATH`, `WEATHER_API_KEY`, `WEATHER_API_URL`,
    /// `WEATHER_TIMEOUT_MS`, `CROPCARE_LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `CROPCARE_PORT` or
    /// `WEATHER_TIMEOUT_MS` is not a valid unsigned integer.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("CROPCARE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("CROPCARE_PORT") {
            self.server.port = parse_override("CROPCARE_PORT", val)?;
        }
        if let Some(val) = lookup("CROPCARE_MODEL_PATH") {
            self.model.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("WEATHER_API_KEY") {
            self.weather.api_key = Some(val);
        }
        if let Some(val) = lookup("WEATHER_API_URL") {
            self.weather.api_url = val;
        }
        if let Some(val) = lookup("WEATHER_TIMEOUT_MS") {
            self.weather.timeout_ms = parse_override("WEATHER_TIMEOUT_MS", val)?;
        }
        if let Some(val) = lookup("CROPCARE_LOG_LEVEL") {
            self.logging.level = val;
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_err| ConfigError::InvalidOverride { var, value })
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    5000
}

/// Classifier model location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelSettings {
    /// Path to the serialized model JSON.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/crop_model.json")
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_input_yields_defaults() {
        let config = ServiceConfig::parse("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.model.path, PathBuf::from("models/crop_model.json"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.weather.is_live());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = r"
server:
  port: 8080
weather:
  api_key: abc123
  timeout_ms: 1500
";
        let config = ServiceConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.weather.live_api_key(), Some("abc123"));
        assert_eq!(config.weather.timeout_ms, 1500);
        assert_eq!(config.weather.api_url, cropcare_weather::DEFAULT_API_URL);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let result = ServiceConfig::parse("server: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(env(&[
                ("CROPCARE_HOST", "127.0.0.1"),
                ("CROPCARE_PORT", "9000"),
                ("CROPCARE_MODEL_PATH", "/srv/model.json"),
                ("WEATHER_API_KEY", "live-key"),
                ("WEATHER_API_URL", "http://localhost:1/weather"),
                ("WEATHER_TIMEOUT_MS", "250"),
                ("CROPCARE_LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model.path, PathBuf::from("/srv/model.json"));
        assert_eq!(config.weather.live_api_key(), Some("live-key"));
        assert_eq!(config.weather.api_url, "http://localhost:1/weather");
        assert_eq!(config.weather.timeout_ms, 250);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_port_override_is_rejected() {
        let mut config = ServiceConfig::default();
        let result = config.apply_overrides(env(&[("CROPCARE_PORT", "http")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride {
                var: "CROPCARE_PORT",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = ServiceConfig::from_file(Path::new("/nonexistent/cropcare-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
