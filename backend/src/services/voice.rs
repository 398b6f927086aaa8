//! Voice summary composition
//!
//! Assembles a multi-sentence status string from screen-state fragments.
//! Fragment phrasing lives in the translation table keyed by
//! (language, fragment kind), so adding a language means adding templates,
//! not code branches. Unsupported languages fall back to English per
//! fragment.

use std::sync::Arc;

use shared::{ScreenContent, VoiceSummary};

use crate::services::translation::{render, TranslationTable};

const DEFAULT_SECTION: &str = "dashboard";

/// Voice summary composer.
#[derive(Clone)]
pub struct VoiceComposer {
    translations: Arc<TranslationTable>,
}

impl VoiceComposer {
    pub fn new(translations: Arc<TranslationTable>) -> Self {
        Self { translations }
    }

    /// Compose the summary in fixed fragment order: section, weather,
    /// alert count, predicted yield, location.
    pub fn compose(&self, language: &str, content: &ScreenContent) -> VoiceSummary {
        let mut fragments = Vec::new();

        let section_key = content.section.as_deref().unwrap_or(DEFAULT_SECTION);
        let section_name = self.translations.get(language, section_key);
        fragments.push(render(
            self.translations.get(language, "voice_section"),
            &[("section", section_name)],
        ));

        if let Some(weather) = &content.weather {
            let temperature = weather
                .temperature
                .map(format_number)
                .unwrap_or_else(|| "N/A".to_string());
            let description = weather.description.as_deref().unwrap_or("N/A");
            fragments.push(render(
                self.translations.get(language, "voice_weather"),
                &[("temperature", &temperature), ("description", description)],
            ));
        }

        if !content.alerts.is_empty() {
            fragments.push(render(
                self.translations.get(language, "voice_alerts"),
                &[("count", &content.alerts.len().to_string())],
            ));
        }

        if let Some(prediction) = &content.crop_prediction {
            let yield_value = prediction
                .predicted_yield
                .map(format_number)
                .unwrap_or_else(|| "N/A".to_string());
            fragments.push(render(
                self.translations.get(language, "voice_yield"),
                &[("yield", &yield_value)],
            ));
        }

        if let Some(location) = &content.location {
            let city = location.city.as_deref().unwrap_or("Unknown");
            fragments.push(render(
                self.translations.get(language, "voice_location"),
                &[("city", city)],
            ));
        }

        VoiceSummary {
            summary: fragments.join(" "),
            language: language.to_string(),
            sections_covered: fragments.len(),
        }
    }
}

/// Speak whole numbers without a trailing ".0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
