//! Gaussian naive Bayes.
//!
//! Class probability is the softmax of the joint log-likelihood
//!
//! ```text
//! ln prior_c - 1/2 * sum_i ln(2 pi var_ci) - 1/2 * sum_i (x_i - theta_ci)^2 / var_ci
//! ```
//!
//! computed with the log-sum-exp shift so large negative likelihoods do not
//! underflow to an all-zero distribution.

use std::f64::consts::PI;

use cropcare_types::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

use super::{ModelError, validate_classes};

/// Gaussian naive Bayes parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GaussianNb {
    classes: Vec<String>,
    class_prior: Vec<f64>,
    theta: Vec<Vec<f64>>,
    var: Vec<Vec<f64>>,
}

impl GaussianNb {
    /// Build and validate a model from its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] if the parameters are inconsistent.
    pub fn new(
        classes: Vec<String>,
        class_prior: Vec<f64>,
        theta: Vec<Vec<f64>>,
        var: Vec<Vec<f64>>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            classes,
            class_prior,
            theta,
            var,
        };
        model.validate()?;
        Ok(model)
    }

    /// Class labels.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check that priors are positive, every class has `FEATURE_COUNT` finite
    /// means, and every variance is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_classes(&self.classes)?;
        let n = self.classes.len();
        if self.class_prior.len() != n || self.theta.len() != n || self.var.len() != n {
            return Err(ModelError::Invalid(format!(
                "gaussian_nb expects {n} priors, means and variances; got {}, {}, {}",
                self.class_prior.len(),
                self.theta.len(),
                self.var.len()
            )));
        }

        for (label, prior) in self.classes.iter().zip(&self.class_prior) {
            if !prior.is_finite() || *prior <= 0.0 {
                return Err(ModelError::Invalid(format!(
                    "class {label:?} has non-positive prior {prior}"
                )));
            }
        }

        for ((label, means), variances) in self.classes.iter().zip(&self.theta).zip(&self.var) {
            if means.len() != FEATURE_COUNT || variances.len() != FEATURE_COUNT {
                return Err(ModelError::Invalid(format!(
                    "class {label:?} must have {FEATURE_COUNT} means and variances"
                )));
            }
            if means.iter().any(|m| !m.is_finite()) {
                return Err(ModelError::Invalid(format!(
                    "class {label:?} has a non-finite mean"
                )));
            }
            if variances.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(ModelError::Invalid(format!(
                    "class {label:?} has a non-positive variance"
                )));
            }
        }
        Ok(())
    }

    /// Per-class probability for `features`.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let x = features.to_array();
        let joint: Vec<f64> = self
            .class_prior
            .iter()
            .zip(self.theta.iter().zip(&self.var))
            .map(|(prior, (means, variances))| {
                let log_likelihood: f64 = x
                    .iter()
                    .zip(means.iter().zip(variances))
                    .map(|(xi, (mean, var))| {
                        let diff = xi - mean;
                        -0.5 * (2.0 * PI * var).ln() - 0.5 * diff * diff / var
                    })
                    .sum();
                prior.ln() + log_likelihood
            })
            .collect();

        softmax(&joint)
    }
}

/// Normalize log-space scores into probabilities.
fn softmax(log_scores: &[f64]) -> Vec<f64> {
    let max = log_scores
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return vec![f64::NAN; log_scores.len()];
    }
    let exps: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn two_class() -> GaussianNb {
        GaussianNb::new(
            vec![String::from("dry"), String::from("wet")],
            vec![0.5, 0.5],
            vec![
                vec![50.0, 50.0, 50.0, 30.0, 30.0, 7.0, 40.0],
                vec![50.0, 50.0, 50.0, 25.0, 85.0, 6.5, 220.0],
            ],
            vec![vec![100.0; FEATURE_COUNT], vec![100.0; FEATURE_COUNT]],
        )
        .unwrap()
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = two_class();
        let p = model.predict_proba(&FeatureVector::from_array([
            50.0, 50.0, 50.0, 27.0, 60.0, 6.8, 120.0,
        ]));
        assert_eq!(p.len(), 2);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn closer_class_wins() {
        let model = two_class();
        let p = model.predict_proba(&FeatureVector::from_array([
            50.0, 50.0, 50.0, 25.0, 85.0, 6.5, 220.0,
        ]));
        assert!(p[1] > p[0]);
    }

    #[test]
    fn far_outliers_do_not_underflow() {
        let model = two_class();
        let p = model.predict_proba(&FeatureVector::from_array([
            1e6, -1e6, 1e6, 1e6, 1e6, 1e6, -1e6,
        ]));
        assert!(p.iter().all(|v| v.is_finite()));
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_variance() {
        let result = GaussianNb::new(
            vec![String::from("rice")],
            vec![1.0],
            vec![vec![1.0; FEATURE_COUNT]],
            vec![vec![0.0; FEATURE_COUNT]],
        );
        assert!(matches!(result, Err(ModelError::Invalid(_))));
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let result = GaussianNb::new(
            vec![String::from("rice")],
            vec![1.0],
            vec![vec![1.0; 6]],
            vec![vec![1.0; 6]],
        );
        assert!(matches!(result, Err(ModelError::Invalid(_))));
    }
}
