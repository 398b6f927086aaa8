//! Location detection models

use serde::{Deserialize, Serialize};

/// Reverse-geocoded location info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub region: String,
    pub district: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
}
