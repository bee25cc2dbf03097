//! The classifier seam.
//!
//! A [`Classifier`] maps a [`FeatureVector`] to a probability for each of its
//! classes. Implementations are immutable after construction and shared
//! across request tasks, hence the `Send + Sync` bound.

use std::cmp::Ordering;
use std::fmt;

use cropcare_types::FeatureVector;

/// Errors raised when a classifier's output is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// `predict_proba` returned a different number of values than there
    /// are classes.
    #[error("classifier returned {probabilities} probabilities for {classes} classes")]
    ShapeMismatch {
        /// Number of classes.
        classes: usize,
        /// Number of probabilities returned.
        probabilities: usize,
    },
}

/// Probability assigned to one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbability {
    /// Class label.
    pub label: String,
    /// Probability in `[0, 1]`.
    pub probability: f64,
}

/// Result of classifying one feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Top-1 label under [`rank_order`], or `None` for a classifier with no
    /// classes.
    pub label: Option<String>,
    /// Probability of every class, in the classifier's class order.
    pub distribution: Vec<ClassProbability>,
}

/// A trained model mapping feature vectors to class probabilities.
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Class labels, in the order `predict_proba` reports them.
    fn classes(&self) -> &[String];

    /// Probability of each class for `features`, in [`Classifier::classes`]
    /// order. Values are non-negative and sum to approximately 1.
    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64>;

    /// Top-1 label and full labelled distribution for `features`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::ShapeMismatch`] if `predict_proba` does not
    /// return exactly one value per class.
    fn classify(&self, features: &FeatureVector) -> Result<Classification, ClassifierError> {
        let classes = self.classes();
        let probabilities = self.predict_proba(features);
        if probabilities.len() != classes.len() {
            return Err(ClassifierError::ShapeMismatch {
                classes: classes.len(),
                probabilities: probabilities.len(),
            });
        }

        let distribution: Vec<ClassProbability> = classes
            .iter()
            .zip(probabilities)
            .map(|(label, probability)| ClassProbability {
                label: label.clone(),
                probability,
            })
            .collect();

        let label = distribution
            .iter()
            .min_by(|a, b| rank_order(a, b))
            .map(|top| top.label.clone());

        Ok(Classification {
            label,
            distribution,
        })
    }
}

/// Ranking order: higher probability first, equal probabilities by label
/// ascending. NaN ranks below every number.
pub fn rank_order(a: &ClassProbability, b: &ClassProbability) -> Ordering {
    rank_key(b.probability)
        .total_cmp(&rank_key(a.probability))
        .then_with(|| a.label.cmp(&b.label))
}

fn rank_key(probability: f64) -> f64 {
    if probability.is_nan() {
        f64::NEG_INFINITY
    } else {
        probability
    }
}
