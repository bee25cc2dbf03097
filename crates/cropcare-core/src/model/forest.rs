//! Random forest of axis-aligned decision trees.
//!
//! Each tree is a flat node array rooted at index 0, the layout produced by
//! common tree exporters. A split sends a sample left when
//! `x[feature] <= threshold`. A leaf carries per-class weights (sample counts
//! or fractions); the tree's prediction is those weights normalized to sum 1,
//! and the forest averages its trees.

use cropcare_types::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;

use super::{ModelError, validate_classes};

/// One node of a decision tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node.
    Split {
        /// Index into the feature vector.
        feature: usize,
        /// Samples with `x[feature] <= threshold` go left.
        threshold: f64,
        /// Index of the left child.
        left: usize,
        /// Index of the right child.
        right: usize,
    },
    /// Terminal node.
    Leaf {
        /// Per-class weights in class order.
        value: Vec<f64>,
    },
}

/// A single decision tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    /// Nodes; index 0 is the root.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Check that the tree is well formed for `class_count` classes.
    ///
    /// Children must point strictly forward, which rules out cycles and
    /// guarantees every walk from the root ends at a leaf.
    fn validate(&self, tree_index: usize, class_count: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid(format!("tree {tree_index} has no nodes")));
        }
        let node_count = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} node {i} splits on feature {feature}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} node {i} has a non-finite threshold"
                        )));
                    }
                    if *left <= i || *right <= i || *left >= node_count || *right >= node_count
                    {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} node {i} has out-of-order children {left}/{right}"
                        )));
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != class_count {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} leaf {i} has {} weights for {class_count} classes",
                            value.len()
                        )));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} leaf {i} has a negative or non-finite weight"
                        )));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree_index} leaf {i} has zero total weight"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf and return its raw weights.
    ///
    /// The walk is bounded by the node count; `None` means the tree is
    /// malformed.
    fn leaf_for(&self, x: &[f64; FEATURE_COUNT]) -> Option<&[f64]> {
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index)? {
                TreeNode::Leaf { value } => return Some(value.as_slice()),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let xi = x.get(*feature)?;
                    index = if xi <= threshold { *left } else { *right };
                }
            }
        }
        None
    }
}

/// Random forest parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    classes: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Build and validate a forest.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] if any tree is malformed.
    pub fn new(classes: Vec<String>, trees: Vec<DecisionTree>) -> Result<Self, ModelError> {
        let model = Self { classes, trees };
        model.validate()?;
        Ok(model)
    }

    /// Class labels.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of trees.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Check every tree against the class list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_classes(&self.classes)?;
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("random_forest has no trees".to_owned()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.classes.len())?;
        }
        Ok(())
    }

    /// Mean of the per-tree normalized leaf distributions.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let x = features.to_array();
        let mut totals = vec![0.0; self.classes.len()];
        let mut voting_trees = 0.0_f64;

        for tree in &self.trees {
            let Some(leaf) = tree.leaf_for(&x) else {
                continue;
            };
            let weight: f64 = leaf.iter().sum();
            if weight <= 0.0 {
                continue;
            }
            for (total, w) in totals.iter_mut().zip(leaf) {
                *total += w / weight;
            }
            voting_trees += 1.0;
        }

        if voting_trees > 0.0 {
            for total in &mut totals {
                *total /= voting_trees;
            }
        }
        totals
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec![String::from("maize"), String::from("rice")]
    }

    /// Splits on rainfall (feature 6) at 150 mm.
    fn rainfall_stump(dry: Vec<f64>, wet: Vec<f64>) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 6,
                    threshold: 150.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: dry },
                TreeNode::Leaf { value: wet },
            ],
        }
    }

    fn with_rainfall(rainfall: f64) -> FeatureVector {
        FeatureVector::from_array([80.0, 45.0, 40.0, 24.0, 80.0, 6.5, rainfall])
    }

    #[test]
    fn single_tree_normalizes_leaf_counts() {
        let forest =
            RandomForest::new(labels(), vec![rainfall_stump(vec![30.0, 10.0], vec![0.0, 20.0])])
                .unwrap();
        assert_eq!(forest.predict_proba(&with_rainfall(100.0)), vec![0.75, 0.25]);
        assert_eq!(forest.predict_proba(&with_rainfall(200.0)), vec![0.0, 1.0]);
        // Threshold itself goes left.
        assert_eq!(forest.predict_proba(&with_rainfall(150.0)), vec![0.75, 0.25]);
    }

    #[test]
    fn forest_averages_trees() {
        let forest = RandomForest::new(
            labels(),
            vec![
                rainfall_stump(vec![1.0, 0.0], vec![0.0, 1.0]),
                rainfall_stump(vec![0.0, 1.0], vec![0.0, 1.0]),
            ],
        )
        .unwrap();
        assert_eq!(forest.tree_count(), 2);
        assert_eq!(forest.predict_proba(&with_rainfall(50.0)), vec![0.5, 0.5]);
    }

    #[test]
    fn backward_child_is_rejected() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf {
                    value: vec![1.0, 0.0],
                },
            ],
        };
        assert!(matches!(
            RandomForest::new(labels(), vec![tree]),
            Err(ModelError::Invalid(_))
        ));
    }

    #[test]
    fn bad_feature_index_is_rejected() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 7,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    value: vec![1.0, 0.0],
                },
                TreeNode::Leaf {
                    value: vec![0.0, 1.0],
                },
            ],
        };
        assert!(RandomForest::new(labels(), vec![tree]).is_err());
    }

    #[test]
    fn leaf_width_must_match_classes() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Leaf {
                value: vec![1.0, 0.0, 0.0],
            }],
        };
        assert!(RandomForest::new(labels(), vec![tree]).is_err());
        assert!(RandomForest::new(labels(), Vec::new()).is_err());
    }
}
