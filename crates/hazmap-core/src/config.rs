use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// A single configuration validation finding.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Local hazard dataset paths
    #[serde(default)]
    pub datasets: DatasetConfig,

    /// Remote boundary catalog
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Spatial filter settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Map output settings
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the earthquake point shapefile
    pub earthquakes: PathBuf,

    /// Path to the tsunami point shapefile
    pub tsunamis: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            earthquakes: PathBuf::from("data/earthquakes.shp"),
            tsunamis: PathBuf::from("data/tsunamis.shp"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL of the GeoJSON feature collection of country boundaries
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/python-visualization/folium/master/examples/data/world-countries.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Search radius around the geocoded point, in planar degrees.
    ///
    /// This is a coarse approximation, not a geodesic distance; it was
    /// inherited from the earlier prototype and is configurable for that
    /// reason.
    pub radius_degrees: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radius_degrees: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Path the rendered HTML map is written to
    pub output: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("hazmap.html"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datasets: DatasetConfig::default(),
            catalog: CatalogConfig::default(),
            filter: FilterConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it.
    ///
    /// Returns the config along with any validation warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if validation finds errors.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        match Url::parse(&self.catalog.url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error("catalog.url", "URL must use http or https");
                }
            }
            Err(e) => {
                result.add_error("catalog.url", format!("Invalid URL: {}", e));
            }
        }

        if !self.filter.radius_degrees.is_finite() {
            result.add_error("filter.radius_degrees", "Radius must be a finite number");
        } else if self.filter.radius_degrees < 0.0 {
            result.add_error("filter.radius_degrees", "Radius cannot be negative");
        } else if self.filter.radius_degrees > 180.0 {
            result.add_warning(
                "filter.radius_degrees",
                "Radius exceeds 180 degrees and will match everything",
            );
        }

        if self.datasets.earthquakes.as_os_str().is_empty() {
            result.add_error("datasets.earthquakes", "Path cannot be empty");
        }
        if self.datasets.tsunamis.as_os_str().is_empty() {
            result.add_error("datasets.tsunamis", "Path cannot be empty");
        }
        if self.map.output.as_os_str().is_empty() {
            result.add_error("map.output", "Path cannot be empty");
        }

        result
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        std::fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Invalid("No config directory available".to_string()))?
            .join("hazmap");

        Ok(config_dir.join("config.toml"))
    }
}
