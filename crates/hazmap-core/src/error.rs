//! Centralized error types for the hazmap application.
//!
//! Every failure that can end a session is convertible to [`AppError`];
//! `user_message()` produces a message suitable for terminal display.
//! Recoverable conditions (missing credential, geocode miss, empty filter
//! result) are deliberately not errors: they are handled where they occur
//! and surfaced as ordinary output.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The boundary catalog could not be fetched or parsed. Fatal: it
    /// backs both the country dropdown and the base map.
    #[error("Boundary catalog error: {0}")]
    Catalog(String),

    /// A hazard dataset could not be read at startup.
    #[error("Hazard dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn catalog(err: impl std::fmt::Display) -> Self {
        Self::Catalog(err.to_string())
    }

    pub fn dataset(err: impl std::fmt::Display) -> Self {
        Self::Dataset(err.to_string())
    }

    /// Returns a user-friendly message suitable for terminal display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Catalog(_) => {
                "Could not load the country boundary catalog. Check your internet connection."
            }
            AppError::Dataset(_) => {
                "Could not read a hazard dataset. Check the dataset paths in your configuration."
            }
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "Could not read the configuration file.",
            ConfigError::Parse(_) => "The configuration file is not valid TOML.",
            ConfigError::Invalid(_) => "The configuration contains invalid settings.",
        }
    }
}
