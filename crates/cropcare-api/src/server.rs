//! Listener lifecycle for the CropCare API.
//!
//! The binary calls [`start_server`] once the model and weather provider are
//! ready. It serves until `Ctrl-C`, then lets in-flight recommendation
//! requests finish (a live weather call is bounded by its own timeout).

use std::net::SocketAddr;
use std::sync::Arc;

use cropcare_core::ServerSettings;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Port the frontend expects the API on.
pub const DEFAULT_PORT: u16 = 5000;

/// Listener address for the API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, as an IP literal (`0.0.0.0` for every interface).
    pub host: String,
    /// TCP port, [`DEFAULT_PORT`] unless configured.
    pub port: u16,
}

impl ServerConfig {
    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ServerError::Bind(format!("host {:?} is not an IP address: {e}", self.host))
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
        }
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
        }
    }
}

/// Serve the recommendation API on `config` until `Ctrl-C`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] for an unusable or occupied address and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let model_loaded = state.model_loaded();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("cannot listen on {addr}: {e}")))?;

    info!(%addr, model_loaded, "CropCare API listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    info!("CropCare API stopped");
    Ok(())
}

/// Resolves on `Ctrl-C`. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Ctrl-C handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining requests");
}

/// Failures that stop the API listener.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured address is invalid or cannot be bound.
    #[error("bind error: {0}")]
    Bind(String),

    /// The accept loop failed after binding.
    #[error("serve error: {0}")]
    Serve(String),
}
