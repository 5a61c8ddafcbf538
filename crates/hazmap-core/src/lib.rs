//! Core pieces shared across the hazmap workspace: configuration,
//! the application error taxonomy, and tracing setup.

pub mod config;
pub mod error;

pub use config::{CatalogConfig, Config, DatasetConfig, FilterConfig, MapConfig};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize tracing for the application.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("hazmap core initialized");
    Ok(())
}
