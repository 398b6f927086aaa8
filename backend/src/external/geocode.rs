//! Reverse geocoding client
//!
//! Integrates with a Nominatim-compatible endpoint to resolve coordinates
//! into a region/district/address triple.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reverse geocoding client
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

/// A resolved place
#[derive(Debug, Clone)]
pub struct GeoPlace {
    pub region: String,
    pub district: String,
    pub address: String,
}

/// Nominatim reverse response
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: Option<String>,
    address: Option<NominatimAddress>,
    /// Nominatim reports "Unable to geocode" through this field with a 200.
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NominatimAddress {
    state: Option<String>,
    county: Option<String>,
}

impl GeocodeClient {
    /// Create a new GeocodeClient
    pub fn new(base_url: String, user_agent: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            user_agent,
        }
    }

    /// Resolve coordinates to a place; `None` when the provider finds nothing.
    pub async fn reverse(&self, lat: &str, lon: &str) -> AppResult<Option<GeoPlace>> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.base_url, lat, lon
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| AppError::GeocodeUnavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::GeocodeUnavailable(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let place: NominatimPlace = response
            .json()
            .await
            .map_err(|e| AppError::GeocodeUnavailable(e.to_string()))?;

        if place.error.is_some() {
            return Ok(None);
        }

        let address = place.address.unwrap_or_default();
        Ok(Some(GeoPlace {
            region: address.state.unwrap_or_else(|| "Unknown".to_string()),
            district: address.county.unwrap_or_else(|| "Unknown".to_string()),
            address: place.display_name.unwrap_or_default(),
        }))
    }
}
