//! Axum router construction for the CropCare API.
//!
//! Assembles all routes into a single [`Router`] with permissive CORS so the
//! browser frontend can call the API from another origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the CropCare API.
///
/// The router includes:
/// - `GET /health` -- service status and model availability
/// - `POST /predict` -- recommendation from supplied measurements
/// - `GET /states` -- supported state names
/// - `GET /regional-recommendation/{state}` -- recommendation from estimated
///   conditions
/// - `GET /crop-info/{crop}` -- crop metadata (case-insensitive)
/// - `GET /crops` -- every catalogued crop
/// - `GET /weather/{state}` -- current weather and field advisory
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .route("/states", get(handlers::list_states))
        .route(
            "/regional-recommendation/{state}",
            get(handlers::regional_recommendation),
        )
        .route("/crop-info/{crop}", get(handlers::crop_info))
        .route("/crops", get(handlers::list_crops))
        .route("/weather/{state}", get(handlers::regional_weather))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
