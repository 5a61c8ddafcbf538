//! Error types for the boundary catalog and hazard dataset loaders.

use thiserror::Error;

/// Boundary catalog fetch/parse errors. Fatal to the session: without the
/// catalog there is no dropdown and no base map.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog request returned status {0}")]
    Status(u16),

    #[error("Catalog parse error: {0}")]
    Parse(String),
}

/// Hazard dataset read errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),
}
