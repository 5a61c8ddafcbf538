//! Current-weather client for the OpenWeatherMap API.

use hazmap_geo::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::{WeatherError, WeatherSummary};

const OPENWEATHERMAP_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: ApiMain,
    weather: Vec<ApiCondition>,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a client for the real OpenWeatherMap endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Network`] if the HTTP client cannot be built.
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OPENWEATHERMAP_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Network`] if the HTTP client cannot be built.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch current weather at `point`, metric units.
    ///
    /// No retries: any failure is terminal for this selection and the
    /// caller renders no weather block.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] on transport failure, non-success status,
    /// or a payload that does not match the expected shape.
    pub async fn fetch(&self, point: GeoPoint) -> Result<WeatherSummary, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url,
            point.latitude,
            point.longitude,
            urlencoding::encode(&self.api_key),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let condition = parsed
            .weather
            .first()
            .map(|c| c.description.clone())
            .ok_or_else(|| WeatherError::Parse("empty conditions list".to_string()))?;

        tracing::debug!(
            "Weather at ({}, {}): {} C, {}",
            point.latitude,
            point.longitude,
            parsed.main.temp,
            condition
        );

        Ok(WeatherSummary {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            condition,
            wind_speed_ms: parsed.wind.speed,
            fetched_at: chrono::Utc::now(),
        })
    }
}
