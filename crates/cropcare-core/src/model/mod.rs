//! Serialized crop classification models.
//!
//! A model file is a JSON document tagged by `kind`:
//!
//! ```json
//! {"kind": "gaussian_nb", "classes": [...], "class_prior": [...], "theta": [[...]], "var": [[...]]}
//! {"kind": "random_forest", "classes": [...], "trees": [{"nodes": [...]}]}
//! ```
//!
//! Files are validated when loaded so that prediction never has to handle a
//! malformed model: every per-class vector matches the class list, every
//! per-feature vector has [`FEATURE_COUNT`] entries, and tree children always
//! point forward in the node array.
//!
//! [`FEATURE_COUNT`]: cropcare_types::FEATURE_COUNT

pub mod forest;
pub mod naive_bayes;

use std::path::Path;

use cropcare_types::FeatureVector;
use serde::Deserialize;
use tracing::info;

use crate::classifier::Classifier;

pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use naive_bayes::GaussianNb;

/// Errors that can occur while loading a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("failed to read model file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid model document.
    #[error("failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but its parameters are inconsistent.
    #[error("invalid model: {0}")]
    Invalid(String),
}

/// A loaded crop model.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CropModel {
    /// Gaussian naive Bayes.
    GaussianNb(GaussianNb),
    /// Ensemble of decision trees with averaged leaf distributions.
    RandomForest(RandomForest),
}

impl CropModel {
    /// Parse and validate a model from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] for malformed JSON or an unknown `kind`,
    /// and [`ModelError::Invalid`] for inconsistent parameters.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Read, parse, and validate a model file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] if the file cannot be read, otherwise as
    /// [`CropModel::from_json`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            kind = model.kind(),
            classes = model.classes().len(),
            "Crop model loaded"
        );
        Ok(model)
    }

    /// Model family name, as written in the `kind` tag.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::GaussianNb(_) => "gaussian_nb",
            Self::RandomForest(_) => "random_forest",
        }
    }

    /// Check parameter consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::GaussianNb(model) => model.validate(),
            Self::RandomForest(model) => model.validate(),
        }
    }
}

impl Classifier for CropModel {
    fn classes(&self) -> &[String] {
        match self {
            Self::GaussianNb(model) => model.classes(),
            Self::RandomForest(model) => model.classes(),
        }
    }

    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        match self {
            Self::GaussianNb(model) => model.predict_proba(features),
            Self::RandomForest(model) => model.predict_proba(features),
        }
    }
}

/// Shared check: at least one class, no duplicate or empty labels.
fn validate_classes(classes: &[String]) -> Result<(), ModelError> {
    if classes.is_empty() {
        return Err(ModelError::Invalid("model has no classes".to_owned()));
    }
    let mut seen = std::collections::BTreeSet::new();
    for label in classes {
        if label.trim().is_empty() {
            return Err(ModelError::Invalid("empty class label".to_owned()));
        }
        if !seen.insert(label.as_str()) {
            return Err(ModelError::Invalid(format!("duplicate class label {label:?}")));
        }
    }
    Ok(())
}
