//! Voice summary models

use serde::{Deserialize, Serialize};

/// Screen state fragments supplied by the frontend for summarization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenContent {
    /// Currently visible section key; defaults to "dashboard" when absent.
    pub section: Option<String>,
    pub weather: Option<ScreenWeather>,
    pub alerts: Vec<serde_json::Value>,
    pub crop_prediction: Option<ScreenPrediction>,
    pub location: Option<ScreenLocation>,
}

/// Weather fragment of the screen state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenWeather {
    pub temperature: Option<f64>,
    pub description: Option<String>,
}

/// Prediction fragment of the screen state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenPrediction {
    pub predicted_yield: Option<f64>,
}

/// Location fragment of the screen state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenLocation {
    pub city: Option<String>,
}

/// Composed voice summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSummary {
    /// Sentence fragments joined by single spaces, in inclusion order.
    pub summary: String,
    pub language: String,
    /// Number of fragments actually included (1 to 5).
    pub sections_covered: usize,
}
