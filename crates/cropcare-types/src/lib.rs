//! Shared type definitions for the CropCare recommendation service.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Response types flow downstream to `TypeScript` via `ts-rs`
//! for the browser frontend.
//!
//! # Modules
//!
//! - [`features`] -- The 7-feature model input and the per-request weather
//!   and soil readings it is assembled from
//! - [`reference`] -- Static reference records (regions, crop metadata)
//! - [`recommendation`] -- Ranked recommendation results
//! - [`responses`] -- JSON payloads returned by the HTTP API

pub mod features;
pub mod recommendation;
pub mod reference;
pub mod responses;

// Re-export all public types at crate root for convenience.
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, SoilProfile, WeatherReading};
pub use recommendation::{
    CropRecommendation, RecommendationResult, RegionalConditions, RegionalRecommendation,
};
pub use reference::{CropMetadata, NOT_AVAILABLE, Region};
pub use responses::{
    CropDetailsResponse, CropListResponse, ErrorResponse, HealthResponse, InputConditions,
    PredictResponse, RegionalRecommendationResponse, RegionalWeatherResponse, StatesResponse,
};
