//! Crop suitability scoring
//!
//! A rule-based 0-100 score from temperature, humidity, and soil pH. The
//! score falls back to a fixed 50 when weather data is absent, when the
//! current readings are missing, or when the yield model is not loaded; the
//! model-loaded gate does not use the model but is part of the contract.

use std::sync::Arc;

use shared::{SuitabilityCategory, SuitabilityResult, WeatherSnapshot};

use crate::services::translation::{render, TranslationTable};

const DEFAULT_SCORE: f64 = 50.0;
const OPTIMAL_TEMP: f64 = 25.0;
const OPTIMAL_HUMIDITY: f64 = 60.0;
const OPTIMAL_PH: f64 = 6.5;

/// Crop suitability scorer.
#[derive(Clone)]
pub struct SuitabilityScorer {
    translations: Arc<TranslationTable>,
}

impl SuitabilityScorer {
    pub fn new(translations: Arc<TranslationTable>) -> Self {
        Self { translations }
    }

    /// Compute the 0-100 suitability score. Pure and idempotent.
    pub fn score(
        &self,
        snapshot: Option<&WeatherSnapshot>,
        soil_ph: Option<f64>,
        model_loaded: bool,
    ) -> f64 {
        let Some(snapshot) = snapshot else {
            return DEFAULT_SCORE;
        };
        if !model_loaded {
            return DEFAULT_SCORE;
        }

        let (Some(temp), Some(humidity)) = (snapshot.temperature(), snapshot.humidity()) else {
            return DEFAULT_SCORE;
        };

        let temp_score = (100.0 - (temp - OPTIMAL_TEMP).abs() * 2.0).max(0.0);
        let humidity_score = (100.0 - (humidity - OPTIMAL_HUMIDITY).abs() * 1.5).max(0.0);
        let ph_score = (100.0 - (soil_ph.unwrap_or(OPTIMAL_PH) - OPTIMAL_PH).abs() * 20.0).max(0.0);

        let overall = (temp_score + humidity_score + ph_score) / 3.0;
        overall.clamp(0.0, 100.0)
    }

    /// Score and wrap into a localized response.
    pub fn evaluate(
        &self,
        crop: &str,
        snapshot: Option<&WeatherSnapshot>,
        soil_ph: Option<f64>,
        language: &str,
        model_loaded: bool,
    ) -> SuitabilityResult {
        let score = self.score(snapshot, soil_ph, model_loaded);
        let percentage = (score * 10.0).round() / 10.0;
        let category = SuitabilityCategory::from_score(score);

        SuitabilityResult {
            crop: crop.to_string(),
            suitability_percentage: percentage,
            category,
            category_text: self.translations.get(language, category.key()).to_string(),
            color: category.color().to_string(),
            message: render(
                self.translations.get(language, "crop_suitable"),
                &[("percentage", &percentage.to_string())],
            ),
        }
    }
}
