//! Geospatial data model for hazmap: the boundary catalog, the hazard
//! point collections, and the radius filter that ties a selection to the
//! records near it.

pub mod boundaries;
pub mod error;
pub mod filter;
pub mod hazards;
pub mod types;

pub use boundaries::{fetch_catalog, parse_catalog};
pub use error::{CatalogError, DatasetError};
pub use filter::{filter_within_radius, point_within_radius};
pub use hazards::load_hazards;
pub use types::{BoundaryFeature, GeoPoint, HazardRecord, LocatedHazard};
