//! Weather Provider for the CropCare recommendation service.
//!
//! Given a state name, returns `{temperature, humidity, rainfall}` for the
//! state's representative city. Two sources exist:
//!
//! - **Mock** (default when no API key is configured): a deterministic
//!   formula of latitude. No network, no failure mode beyond an unknown state.
//! - **Live**: one HTTP GET to an `OpenWeatherMap`-compatible endpoint, bounded
//!   by a timeout. Any failure is reported as a [`WeatherError`] and never
//!   retried.
//!
//! # Modules
//!
//! - [`advisory`] -- One-sentence field advisory derived from a reading.
//! - [`config`] -- [`WeatherConfig`] and mock/live mode selection.
//! - [`error`] -- [`WeatherError`].
//! - [`live`] -- The `OpenWeatherMap` client.
//! - [`provider`] -- [`WeatherProvider`], the per-state entry point.

pub mod advisory;
pub mod config;
pub mod error;
pub mod live;
pub mod provider;

// Re-export primary types at crate root.
pub use advisory::advisory;
pub use config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, PLACEHOLDER_API_KEY, WeatherConfig};
pub use error::WeatherError;
pub use live::LiveWeatherClient;
pub use provider::{WeatherProvider, WeatherSource, mock_reading};
