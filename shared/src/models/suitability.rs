//! Crop suitability models

use serde::{Deserialize, Serialize};

/// Suitability category, derived from the percentage score with inclusive
/// lower bounds evaluated top-down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityCategory {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl SuitabilityCategory {
    /// Categorize a 0-100 suitability score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Moderate
        } else if score >= 20.0 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Translation key for the localized category text.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::VeryPoor => "very_poor",
        }
    }

    /// Symbolic color id for the frontend.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "lightgreen",
            Self::Moderate => "yellow",
            Self::Poor => "orange",
            Self::VeryPoor => "red",
        }
    }
}

/// Crop suitability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitabilityResult {
    pub crop: String,
    pub suitability_percentage: f64,
    pub category: SuitabilityCategory,
    /// Localized category text.
    pub category_text: String,
    pub color: String,
    /// Localized summary message.
    pub message: String,
}
