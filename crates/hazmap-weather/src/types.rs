use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather at a geocoded point, always metric. Recomputed on
/// every selection; nothing here is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    pub humidity_pct: u8,
    /// Free-text condition description from the provider
    pub condition: String,
    /// Wind speed in meters per second
    pub wind_speed_ms: f64,
    pub fetched_at: DateTime<Utc>,
}

/// Weather provider errors. Every variant means the same thing to the
/// caller: no weather for this selection. None of them should abort the
/// session or trigger a retry.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather request returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// User-friendly message for terminal display.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network(_) => "Weather unavailable: network error.",
            WeatherError::Status(401) => "Weather unavailable: the API key was rejected.",
            WeatherError::Status(_) => "Weather unavailable: the provider returned an error.",
            WeatherError::Parse(_) => "Weather unavailable: unexpected provider response.",
        }
    }
}
