//! Forward geocoding: convert a place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use hazmap_geo::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::WeatherError;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "hazmap/0.1.0 (hazard and weather dashboard)";

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

impl Geocoder {
    /// Create a geocoder against the public Nominatim endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Network`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Create a geocoder against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Network`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to its best-guess coordinates.
    ///
    /// Returns `None` on any failure (transport, status, parse) or when
    /// the provider has no match; the caller reports "not found" and
    /// skips the downstream lookups for this selection.
    pub async fn resolve(&self, place_name: &str) -> Option<GeoPoint> {
        if place_name.trim().is_empty() {
            return None;
        }

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(place_name),
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Geocode request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Geocode returned status {}", response.status());
            return None;
        }

        let hits: Vec<NominatimHit> = match response.json().await {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!("Geocode parse error: {}", e);
                return None;
            }
        };

        let hit = hits.first()?;
        let latitude: f64 = hit.lat.parse().ok()?;
        let longitude: f64 = hit.lon.parse().ok()?;

        tracing::info!(
            "Geocoded '{}' to ({}, {})",
            place_name,
            latitude,
            longitude
        );
        Some(GeoPoint::new(latitude, longitude))
    }
}
