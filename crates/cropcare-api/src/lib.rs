//! HTTP API for the CropCare crop recommendation service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Prediction** (`POST /predict`) from caller-supplied soil and weather
//!   measurements
//! - **Regional recommendations** (`GET /regional-recommendation/{state}`)
//!   from estimated soil and current weather
//! - **Reference lookups**: states, crop metadata, per-state weather with a
//!   field advisory
//! - **Health** (`GET /health`) including whether the model is loaded
//!
//! # Architecture
//!
//! Every handler reads from the immutable [`AppState`] built at startup.
//! Nothing is mutated after initialization, so requests never contend on a
//! lock. Failures are expressed as [`ApiError`] and rendered as
//! `{"error": message}` bodies; no handler panics.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{DEFAULT_PORT, ServerConfig, ServerError, start_server};
pub use state::AppState;
