//! Weather and geocoding services for hazmap.
//!
//! Forward geocoding via Nominatim (free, no API key) and current weather
//! via the OpenWeatherMap API (user-supplied key, metric units).

pub mod geocode;
pub mod provider;
pub mod types;

pub use geocode::Geocoder;
pub use provider::WeatherClient;
pub use types::{WeatherError, WeatherSummary};
