//! Error types for the weather provider.
//!
//! Callers treat every variant as "weather unavailable"; the variants exist
//! so the cause can be logged.

/// Errors that can occur while fetching a weather reading.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The state is not in the region table.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// The HTTP client could not be constructed.
    #[error("weather client error: {0}")]
    Client(String),

    /// The request did not complete within the configured timeout.
    #[error("weather request timed out after {timeout_ms} ms")]
    Timeout {
        /// The configured timeout.
        timeout_ms: u64,
    },

    /// The request failed before a response was received.
    #[error("weather request failed: {0}")]
    Request(String),

    /// The provider answered with a non-2xx status.
    #[error("weather provider returned status {0}")]
    Status(u16),

    /// The response body was not the expected shape.
    #[error("weather response parse failed: {0}")]
    Parse(String),
}
