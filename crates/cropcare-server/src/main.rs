//! CropCare server binary.
//!
//! Wires configuration, reference data, the crop model, and the weather
//! provider into the HTTP API and serves it until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `cropcare-config.yaml` plus environment
//! 2. Initialize structured logging (tracing)
//! 3. Build reference tables
//! 4. Load the crop model (the service still starts if this fails)
//! 5. Select the weather provider
//! 6. Start the HTTP server

mod error;

use std::path::Path;
use std::sync::Arc;

use cropcare_api::{AppState, ServerConfig};
use cropcare_core::{Classifier, CropModel, DEFAULT_CONFIG_FILE, ServiceConfig};
use cropcare_reference::ReferenceData;
use cropcare_weather::WeatherProvider;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::BootError;

/// Application entry point for the CropCare server.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the weather client cannot
/// be built, or the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), BootError> {
    // 1. Load configuration.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("cropcare-server starting");
    info!(
        source,
        host = config.server.host,
        port = config.server.port,
        model_path = %config.model.path.display(),
        "Configuration loaded"
    );

    // 3. Build reference tables.
    let reference = Arc::new(ReferenceData::builtin());
    info!(
        states = reference.regions.len(),
        crops = reference.crops.len(),
        "Reference data ready"
    );

    // 4. Load the crop model.
    let classifier = load_classifier(&config.model.path);

    // 5. Select the weather provider.
    let weather = WeatherProvider::from_config(&config.weather, Arc::clone(&reference))?;
    info!(
        mode = weather.source().name(),
        timeout_ms = config.weather.timeout_ms,
        "Weather provider ready"
    );

    // 6. Start the HTTP server.
    let state = Arc::new(AppState::new(classifier, weather, reference));
    cropcare_api::start_server(&ServerConfig::from(&config.server), state).await?;

    info!("cropcare-server exiting");
    Ok(())
}

/// Load configuration from `cropcare-config.yaml` if present, then apply
/// environment overrides. Returns the config and a label for its source.
fn load_config() -> Result<(ServiceConfig, &'static str), BootError> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let (mut config, source) = if config_path.exists() {
        (ServiceConfig::from_file(config_path)?, DEFAULT_CONFIG_FILE)
    } else {
        (ServiceConfig::default(), "defaults")
    };
    config.apply_env_overrides()?;
    Ok((config, source))
}

/// Load the model at `path`. Failure is logged and yields `None` so the
/// service can still answer health and reference routes.
fn load_classifier(path: &Path) -> Option<Arc<dyn Classifier>> {
    match CropModel::load(path) {
        Ok(model) => Some(Arc::new(model)),
        Err(e) => {
            error!(
                path = %path.display(),
                error = %e,
                "Crop model failed to load; predictions disabled"
            );
            None
        }
    }
}
