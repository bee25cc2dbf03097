//! Error types for the CropCare server binary.
//!
//! [`BootError`] wraps every failure that stops the process. A model that
//! fails to load is not one of them: the service starts without it.

/// Top-level error for the CropCare server binary.
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: cropcare_core::ConfigError,
    },

    /// The live weather client could not be built.
    #[error("weather error: {source}")]
    Weather {
        /// The underlying weather error.
        #[from]
        source: cropcare_weather::WeatherError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: cropcare_api::ServerError,
    },
}
