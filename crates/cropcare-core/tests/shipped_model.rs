//! Tests against the model file shipped in `models/crop_model.json`.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::PathBuf;
use std::sync::Arc;

use cropcare_core::{Classifier, CropModel, RecommendationEngine, TOP_RECOMMENDATIONS};
use cropcare_reference::ReferenceData;
use cropcare_types::{FEATURE_COUNT, FeatureVector};

fn model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/crop_model.json")
}

fn load() -> CropModel {
    CropModel::load(&model_path()).unwrap()
}

#[test]
fn shipped_model_has_the_standard_classes() {
    let model = load();
    assert_eq!(model.kind(), "gaussian_nb");
    assert_eq!(model.classes().len(), 22);
    assert!(model.classes().iter().any(|c| c == "rice"));
    assert!(model.classes().iter().any(|c| c == "chickpea"));
}

#[test]
fn class_means_classify_to_their_own_class() {
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(model_path()).unwrap()).unwrap();
    let model = load();

    let theta = raw["theta"].as_array().unwrap();
    for (label, mean) in model.classes().iter().zip(theta) {
        let values: Vec<f64> = mean
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let array: [f64; FEATURE_COUNT] = values.try_into().unwrap();
        let classification = model.classify(&FeatureVector::from_array(array)).unwrap();
        assert_eq!(classification.label.as_deref(), Some(label.as_str()));
    }
}

#[test]
fn typical_rice_conditions_recommend_rice() {
    let engine = RecommendationEngine::new(
        Some(Arc::new(load())),
        Arc::new(ReferenceData::builtin()),
    );
    let features = FeatureVector::from_array([90.0, 42.0, 43.0, 20.88, 82.0, 6.5, 202.9]);
    let result = engine.recommend(&features).unwrap();

    assert_eq!(result.primary_recommendation, "rice");
    assert!(result.confidence > 0.9);
    assert_eq!(result.all_recommendations.len(), TOP_RECOMMENDATIONS);
    assert_eq!(result.all_recommendations[0].metadata.season, "Kharif");

    let total: f64 = model_distribution_sum(&load(), &features);
    assert!((total - 1.0).abs() < 1e-9);
    for rec in &result.all_recommendations {
        assert!((0.0..=1.0).contains(&rec.confidence));
    }
}

fn model_distribution_sum(model: &CropModel, features: &FeatureVector) -> f64 {
    model.predict_proba(features).iter().sum()
}
