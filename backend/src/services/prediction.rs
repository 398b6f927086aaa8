//! Yield prediction service
//!
//! Wraps a pre-trained regression artifact: a random-forest export (JSON)
//! together with the categorical encoders and known category lists produced
//! at training time. The artifact is loaded once at startup; requests fail
//! with `ModelUnavailable` when it is absent.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use shared::{Confidence, ImpactFactors, ImpactLabel, PredictionResult};

use crate::error::{AppError, AppResult};

/// Number of features the trained model expects, in a fixed order.
pub const FEATURE_COUNT: usize = 11;

/// Yield prediction request, with the training-time defaults for every
/// absent field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PredictYieldInput {
    pub region: String,
    pub crop: String,
    pub year: i32,
    pub temperature: f64,
    pub rainfall: f64,
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
    pub irrigation_quality: i32,
}

impl Default for PredictYieldInput {
    fn default() -> Self {
        Self {
            region: "Maharashtra".to_string(),
            crop: "Wheat".to_string(),
            year: 2024,
            temperature: 25.0,
            rainfall: 1000.0,
            soil_ph: 6.5,
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 40.0,
            organic_matter: 2.5,
            irrigation_quality: 3,
        }
    }
}

/// The trained yield model artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldModel {
    pub regions: Vec<String>,
    pub crops: Vec<String>,
    pub region_encoder: HashMap<String, f64>,
    pub crop_encoder: HashMap<String, f64>,
    pub model: ForestModel,
}

/// A regression forest: the mean of per-tree outputs.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestModel {
    pub trees: Vec<RegressionTree>,
}

/// A single regression tree stored as a flat node array.
#[derive(Debug, Clone, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

/// One tree node; `feature < 0` marks a leaf carrying `value`.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    pub feature: i32,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
    pub value: f64,
}

impl YieldModel {
    /// Load the artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let model: YieldModel = serde_json::from_slice(&bytes)?;
        Ok(model)
    }

    /// Encode a region name; unknown regions map to code 0.
    fn encode_region(&self, region: &str) -> AppResult<f64> {
        encode(region, &self.regions, &self.region_encoder)
    }

    /// Encode a crop name; unknown crops map to code 0.
    fn encode_crop(&self, crop: &str) -> AppResult<f64> {
        encode(crop, &self.crops, &self.crop_encoder)
    }

    /// Build the fixed-order feature vector the trained model expects.
    pub fn feature_vector(&self, input: &PredictYieldInput) -> AppResult<[f64; FEATURE_COUNT]> {
        Ok([
            self.encode_region(&input.region)?,
            self.encode_crop(&input.crop)?,
            f64::from(input.year),
            input.temperature,
            input.rainfall,
            input.soil_ph,
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            input.organic_matter,
            f64::from(input.irrigation_quality),
        ])
    }

    /// Run the regression and derive the confidence and impact annotations.
    pub fn predict(&self, input: &PredictYieldInput) -> AppResult<PredictionResult> {
        let features = self.feature_vector(input)?;
        let raw = self.model.predict(&features)?;
        if !raw.is_finite() {
            return Err(AppError::PredictionFailed);
        }
        let predicted_yield = (raw * 100.0).round() / 100.0;

        let weather_score = (100.0
            - (input.temperature - 25.0).abs() * 2.0
            - (input.rainfall - 1000.0).abs() * 0.05)
            .clamp(0.0, 100.0);
        let soil_score = (100.0 - (input.soil_ph - 6.5).abs() * 10.0).clamp(0.0, 100.0);

        Ok(PredictionResult {
            predicted_yield,
            unit: "kg/hectare".to_string(),
            confidence: confidence(weather_score, soil_score),
            factors: ImpactFactors {
                weather_impact: score_impact(weather_score),
                soil_impact: score_impact(soil_score),
                irrigation_impact: irrigation_impact(input.irrigation_quality),
            },
        })
    }
}

impl ForestModel {
    /// Average the per-tree regression outputs.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> AppResult<f64> {
        if self.trees.is_empty() {
            return Err(AppError::PredictionFailed);
        }

        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.predict(features)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}

impl RegressionTree {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> AppResult<f64> {
        let mut index = 0usize;
        // Bounded by the node count; a malformed artifact with a cycle or a
        // dangling child index fails the prediction instead of looping.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or(AppError::PredictionFailed)?;
            if node.feature < 0 {
                return Ok(node.value);
            }
            let feature = usize::try_from(node.feature).map_err(|_| AppError::PredictionFailed)?;
            let value = features.get(feature).ok_or(AppError::PredictionFailed)?;
            index = if *value <= node.threshold {
                node.left
            } else {
                node.right
            };
        }
        Err(AppError::PredictionFailed)
    }
}

fn encode(name: &str, known: &[String], encoder: &HashMap<String, f64>) -> AppResult<f64> {
    if known.iter().any(|k| k == name) {
        encoder
            .get(name)
            .copied()
            .ok_or(AppError::PredictionFailed)
    } else {
        // Unknown categories fall back to code 0, the first known category.
        Ok(0.0)
    }
}

/// High requires both scores above 70; Medium and Low look at the weather
/// score alone.
fn confidence(weather_score: f64, soil_score: f64) -> Confidence {
    if weather_score > 70.0 && soil_score > 70.0 {
        Confidence::High
    } else if weather_score > 50.0 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn score_impact(score: f64) -> ImpactLabel {
    if score > 70.0 {
        ImpactLabel::Good
    } else if score > 50.0 {
        ImpactLabel::Moderate
    } else {
        ImpactLabel::Poor
    }
}

fn irrigation_impact(quality: i32) -> ImpactLabel {
    if quality >= 4 {
        ImpactLabel::Excellent
    } else if quality >= 3 {
        ImpactLabel::Good
    } else {
        ImpactLabel::Moderate
    }
}
