use geo::{MultiPolygon, Point};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A latitude/longitude coordinate pair, produced by the geocoder and
/// scoped to one user selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The equivalent planar point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

/// A named country outline from the boundary catalog. Backs both the
/// country dropdown and the base-map overlay.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// A single earthquake or tsunami event: a geo-tagged point plus its
/// source attributes. Immutable for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardRecord {
    pub geometry: Point<f64>,
    pub attributes: BTreeMap<String, String>,
}

impl HazardRecord {
    pub fn new(geometry: Point<f64>) -> Self {
        Self {
            geometry,
            attributes: BTreeMap::new(),
        }
    }
}

/// A hazard record that passed the radius filter, augmented with scalar
/// coordinates copied from its own geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedHazard {
    pub latitude: f64,
    pub longitude: f64,
    pub record: HazardRecord,
}
