//! Yield predictor integration tests
//!
//! Property-style checks over the prediction pipeline: the feature vector
//! is always 11 wide in the trained order, unknown categories never raise,
//! and the confidence gate keeps its asymmetry.

use proptest::prelude::*;

use agripredict_backend::services::prediction::{
    ForestModel, PredictYieldInput, RegressionTree, TreeNode, FEATURE_COUNT,
};
use agripredict_backend::services::YieldModel;
use shared::Confidence;

fn leaf(value: f64) -> RegressionTree {
    RegressionTree {
        nodes: vec![TreeNode {
            feature: -1,
            threshold: 0.0,
            left: 0,
            right: 0,
            value,
        }],
    }
}

fn test_model() -> YieldModel {
    YieldModel {
        regions: vec!["Maharashtra".to_string(), "Punjab".to_string()],
        crops: vec!["Wheat".to_string(), "Rice".to_string()],
        region_encoder: [
            ("Maharashtra".to_string(), 0.0),
            ("Punjab".to_string(), 1.0),
        ]
        .into_iter()
        .collect(),
        crop_encoder: [("Wheat".to_string(), 0.0), ("Rice".to_string(), 1.0)]
            .into_iter()
            .collect(),
        model: ForestModel {
            trees: vec![leaf(1400.0), leaf(1600.0)],
        },
    }
}

#[test]
fn forest_averages_tree_outputs() {
    let model = test_model();
    let result = model.predict(&PredictYieldInput::default()).unwrap();
    assert_eq!(result.predicted_yield, 1500.0);
}

#[test]
fn defaults_match_training_configuration() {
    let input = PredictYieldInput::default();
    assert_eq!(input.region, "Maharashtra");
    assert_eq!(input.crop, "Wheat");
    assert_eq!(input.year, 2024);
    assert_eq!(input.irrigation_quality, 3);
}

#[test]
fn request_body_fills_missing_fields_with_defaults() {
    let input: PredictYieldInput =
        serde_json::from_str(r#"{"region": "Punjab", "temperature": 30.0}"#).unwrap();
    assert_eq!(input.region, "Punjab");
    assert_eq!(input.temperature, 30.0);
    assert_eq!(input.crop, "Wheat");
    assert_eq!(input.rainfall, 1000.0);
}

#[test]
fn confidence_boundary_is_asymmetric() {
    let model = test_model();

    let high = PredictYieldInput {
        temperature: 39.5, // weather_score = 71
        soil_ph: 9.4,      // soil_score = 71
        ..Default::default()
    };
    let medium = PredictYieldInput {
        temperature: 39.5, // weather_score = 71
        soil_ph: 9.6,      // soil_score = 69
        ..Default::default()
    };

    assert_eq!(model.predict(&high).unwrap().confidence, Confidence::High);
    assert_eq!(
        model.predict(&medium).unwrap().confidence,
        Confidence::Medium
    );
}

proptest! {
    #[test]
    fn feature_vector_is_always_11_wide(
        region in "[A-Za-z ]{0,20}",
        crop in "[A-Za-z ]{0,20}",
        year in 1990i32..2050,
        temperature in -20.0f64..60.0,
        rainfall in 0.0f64..5000.0,
        soil_ph in 0.0f64..14.0,
        irrigation_quality in 1i32..=5,
    ) {
        let model = test_model();
        let input = PredictYieldInput {
            region,
            crop,
            year,
            temperature,
            rainfall,
            soil_ph,
            irrigation_quality,
            ..Default::default()
        };

        let features = model.feature_vector(&input).unwrap();
        prop_assert_eq!(features.len(), FEATURE_COUNT);
        prop_assert_eq!(features[2], f64::from(year));
        prop_assert_eq!(features[3], temperature);
        prop_assert_eq!(features[10], f64::from(irrigation_quality));
    }

    #[test]
    fn unknown_categories_never_fail(
        region in "[a-z]{1,12}",
        crop in "[a-z]{1,12}",
    ) {
        let model = test_model();
        let input = PredictYieldInput { region, crop, ..Default::default() };

        let result = model.predict(&input).unwrap();
        prop_assert_eq!(result.predicted_yield, 1500.0);

        let features = model.feature_vector(&input).unwrap();
        // Unknown names (lowercase, so never the title-cased known ones)
        // silently encode as the first category.
        prop_assert_eq!(features[0], 0.0);
        prop_assert_eq!(features[1], 0.0);
    }
}
