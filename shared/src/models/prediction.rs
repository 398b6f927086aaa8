//! Yield prediction models

use serde::{Deserialize, Serialize};

/// Prediction confidence tier.
///
/// High requires both weather and soil scores above 70; Medium only needs
/// the weather score above 50. The soil score gates only the High tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Qualitative impact label for a contributing factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImpactLabel {
    Poor,
    Moderate,
    Good,
    Excellent,
}

/// Per-factor impact annotations. Descriptive only; they do not feed back
/// into the numeric prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactFactors {
    pub weather_impact: ImpactLabel,
    pub soil_impact: ImpactLabel,
    pub irrigation_impact: ImpactLabel,
}

/// Yield prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted yield, rounded to two decimal places.
    pub predicted_yield: f64,
    pub unit: String,
    pub confidence: Confidence,
    pub factors: ImpactFactors,
}
