//! Translation lookup service
//!
//! A static (language, key) -> template table covering alert messages,
//! suitability categories, section names, and voice summary fragments.
//! Templates carry `{placeholder}` slots filled via [`render`].
//!
//! Two lookup modes exist on purpose: alert messages must fail loudly when a
//! language lacks the key, while section names and voice fragments fall back
//! to English.

use std::collections::HashMap;

use shared::LanguageInfo;

use crate::error::{AppError, AppResult};

const DEFAULT_LANGUAGE: &str = "en";

/// Translation lookup table, built once at startup and shared read-only.
pub struct TranslationTable {
    languages: Vec<LanguageInfo>,
    strings: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self {
            languages: supported_languages(),
            strings: translation_strings(),
        }
    }

    /// Languages advertised by the languages endpoint.
    pub fn languages(&self) -> &[LanguageInfo] {
        &self.languages
    }

    /// Strict lookup: the requested language must carry the key.
    pub fn required(&self, language: &str, key: &str) -> AppResult<&'static str> {
        self.strings
            .get(language)
            .and_then(|table| table.get(key))
            .copied()
            .ok_or_else(|| AppError::TranslationMissing {
                language: language.to_string(),
                key: key.to_string(),
            })
    }

    /// Lenient lookup: falls back to English, then to the key itself.
    pub fn get<'a>(&self, language: &str, key: &'a str) -> &'a str {
        self.strings
            .get(language)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.strings
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|table| table.get(key))
            })
            .copied()
            .unwrap_or(key)
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `{name}` slots in a template.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

fn supported_languages() -> Vec<LanguageInfo> {
    vec![
        LanguageInfo::new("en", "English", "English"),
        LanguageInfo::new("hi", "Hindi", "हिन्दी"),
        LanguageInfo::new("mr", "Marathi", "मराठी"),
        LanguageInfo::new("bn", "Bengali", "বাংলা"),
        LanguageInfo::new("te", "Telugu", "తెలుగు"),
        LanguageInfo::new("ta", "Tamil", "தமிழ்"),
        LanguageInfo::new("gu", "Gujarati", "ગુજરાતી"),
        LanguageInfo::new("kn", "Kannada", "ಕನ್ನಡ"),
        LanguageInfo::new("ml", "Malayalam", "മലയാളം"),
        LanguageInfo::new("pa", "Punjabi", "ਪੰਜਾਬੀ"),
        LanguageInfo::new("or", "Odia", "ଓଡ଼ିଆ"),
        LanguageInfo::new("as", "Assamese", "অসমীয়া"),
    ]
}

fn translation_strings() -> HashMap<&'static str, HashMap<&'static str, &'static str>> {
    let en: HashMap<&'static str, &'static str> = [
        ("heat_stress", "High temperature alert! Protect your crops from heat stress."),
        ("rain_expected", "Rain expected in {hours} hours. Plan your field work accordingly."),
        ("drought_warning", "Drought conditions detected. Ensure adequate irrigation."),
        ("excellent", "Excellent"),
        ("good", "Good"),
        ("moderate", "Moderate"),
        ("poor", "Poor"),
        ("very_poor", "Very Poor"),
        ("crop_suitable", "This crop is {percentage}% suitable for current conditions."),
        ("dashboard", "Dashboard"),
        ("weather", "Weather"),
        ("alerts", "Alerts"),
        ("prediction", "Yield Prediction"),
        ("settings", "Settings"),
        ("voice_section", "Current section: {section}."),
        ("voice_weather", "Current temperature is {temperature} degrees. Weather is {description}."),
        ("voice_alerts", "{count} weather alerts are active."),
        ("voice_yield", "Predicted crop yield is {yield} kilograms per hectare."),
        ("voice_location", "Location: {city}."),
    ]
    .into_iter()
    .collect();

    let hi: HashMap<&'static str, &'static str> = [
        ("heat_stress", "उच्च तापमान चेतावनी! अपनी फसलों को गर्मी से बचाएं।"),
        ("rain_expected", "{hours} घंटे में बारिश की संभावना है। खेत के काम की योजना बनाएं।"),
        ("drought_warning", "सूखे की स्थिति का पता चला है। पर्याप्त सिंचाई सुनिश्चित करें।"),
        ("excellent", "उत्कृष्ट"),
        ("good", "अच्छा"),
        ("moderate", "मध्यम"),
        ("poor", "खराब"),
        ("very_poor", "बहुत खराब"),
        ("crop_suitable", "यह फसल वर्तमान परिस्थितियों के लिए {percentage}% उपयुक्त है।"),
        ("dashboard", "डैशबोर्ड"),
        ("weather", "मौसम"),
        ("alerts", "चेतावनी"),
        ("prediction", "उपज पूर्वानुमान"),
        ("settings", "सेटिंग्स"),
        ("voice_section", "वर्तमान खंड: {section}।"),
        ("voice_weather", "वर्तमान तापमान {temperature} डिग्री है। मौसम {description} है।"),
        ("voice_alerts", "{count} मौसम चेतावनी सक्रिय हैं।"),
        ("voice_yield", "अनुमानित फसल उत्पादन {yield} किलो प्रति हेक्टेयर है।"),
        ("voice_location", "स्थान: {city}।"),
    ]
    .into_iter()
    .collect();

    let mr: HashMap<&'static str, &'static str> = [
        ("heat_stress", "उच्च तापमान इशारा! आपल्या पिकांचे उष्णतेपासून संरक्षण करा।"),
        ("rain_expected", "{hours} तासांत पाऊस अपेक्षित आहे। शेतीच्या कामाचे नियोजन करा।"),
        ("drought_warning", "दुष्काळी परिस्थिती आढळली आहे। पुरेसे सिंचन सुनिश्चित करा।"),
        ("excellent", "उत्कृष्ट"),
        ("good", "चांगले"),
        ("moderate", "मध्यम"),
        ("poor", "वाईट"),
        ("very_poor", "खूप वाईट"),
        ("crop_suitable", "हे पीक सध्याच्या परिस्थितीसाठी {percentage}% योग्य आहे।"),
        ("dashboard", "डॅशबोर्ड"),
        ("weather", "हवामान"),
        ("alerts", "इशारे"),
        ("prediction", "उत्पादन अंदाज"),
        ("settings", "सेटिंग्ज"),
        ("voice_section", "सध्याचा विभाग: {section}।"),
        ("voice_weather", "सध्याचे तापमान {temperature} अंश आहे। हवामान {description} आहे।"),
        ("voice_alerts", "{count} हवामान इशारे सक्रिय आहेत।"),
        ("voice_yield", "अंदाजित पीक उत्पादन {yield} किलो प्रति हेक्टर आहे।"),
        ("voice_location", "स्थान: {city}।"),
    ]
    .into_iter()
    .collect();

    [("en", en), ("hi", hi), ("mr", mr)].into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fails_for_unsupported_language() {
        let table = TranslationTable::new();
        assert!(table.required("en", "heat_stress").is_ok());
        assert!(table.required("bn", "heat_stress").is_err());
        assert!(table.required("en", "no_such_key").is_err());
    }

    #[test]
    fn get_falls_back_to_english_then_key() {
        let table = TranslationTable::new();
        assert_eq!(table.get("bn", "dashboard"), "Dashboard");
        assert_eq!(table.get("en", "unknown_section"), "unknown_section");
        assert_eq!(table.get("hi", "weather"), "मौसम");
    }

    #[test]
    fn render_substitutes_placeholders() {
        let text = render("Rain expected in {hours} hours.", &[("hours", "1")]);
        assert_eq!(text, "Rain expected in 1 hours.");
    }

    #[test]
    fn language_list_is_nonempty_and_includes_english() {
        let table = TranslationTable::new();
        assert!(table.languages().iter().any(|l| l.code == "en"));
        assert!(table.languages().len() >= 12);
    }
}
