//! Recommendation core for the CropCare service.
//!
//! Turns a 7-feature soil/weather vector into a ranked, confidence-scored
//! list of crop suggestions merged with static crop metadata.
//!
//! # Modules
//!
//! - [`classifier`] -- The [`Classifier`] trait every model implements, and
//!   the ranking order shared by classification and recommendation.
//! - [`model`] -- Serialized model formats (Gaussian naive Bayes, random
//!   forest) loaded from JSON at startup.
//! - [`engine`] -- [`RecommendationEngine`]: classify, rank top 3, attach
//!   metadata.
//! - [`regional`] -- [`RegionalAdvisor`]: weather + soil estimate for a named
//!   state, then delegate to the engine.
//! - [`config`] -- YAML service configuration with environment overrides.
//!
//! # Architecture
//!
//! The classifier and reference tables are built once at startup and shared
//! read-only through `Arc`. Every request builds its own feature vector and
//! result, so nothing here needs a lock.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod model;
pub mod regional;

// Re-export primary types at crate root.
pub use classifier::{ClassProbability, Classification, Classifier, ClassifierError};
pub use config::{
    ConfigError, DEFAULT_CONFIG_FILE, LoggingSettings, ModelSettings, ServerSettings, ServiceConfig,
};
pub use engine::{EngineError, RecommendationEngine, TOP_RECOMMENDATIONS};
pub use model::{CropModel, ModelError};
pub use regional::{RegionalAdvisor, RegionalError};
