//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Raw GPS coordinates as received from clients.
///
/// Latitude and longitude are kept as the exact strings the client sent and
/// are passed verbatim to the weather provider and used as cache keys, so
/// `"12.0"` and `"12.00"` refer to distinct cache entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RawCoordinates {
    pub latitude: String,
    pub longitude: String,
}

impl RawCoordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Cache key in the `"{lat},{lon}"` form.
    pub fn cache_key(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// A supported interface language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

impl LanguageInfo {
    pub fn new(code: &str, name: &str, native_name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_uses_raw_strings() {
        let a = RawCoordinates::new("12.0", "77.5");
        let b = RawCoordinates::new("12.00", "77.5");
        assert_eq!(a.cache_key(), "12.0,77.5");
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
