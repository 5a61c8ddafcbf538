//! Radius filtering of hazard records around a geocoded point.
//!
//! Distances are planar, measured in the same degree units as the input
//! coordinates. This mirrors the buffer the tool has always used: it is a
//! coarse approximation that distorts near the poles and across the
//! antimeridian, and callers must not read metric accuracy into it.

use geo::{Distance, Euclidean, Point};

use crate::types::{HazardRecord, LocatedHazard};

/// Whether `point` lies strictly inside the disk of `radius_degrees`
/// around `center`.
///
/// The disk is open: a point exactly on the boundary is excluded.
pub fn point_within_radius(point: Point<f64>, center: Point<f64>, radius_degrees: f64) -> bool {
    Euclidean.distance(point, center) < radius_degrees
}

/// Returns the records whose geometry falls inside the disk around
/// `center`, each augmented with scalar latitude/longitude fields copied
/// from its own geometry. The source collection is left untouched.
///
/// A linear scan, preserving input order. An empty result is a normal
/// outcome, not an error.
pub fn filter_within_radius(
    center: Point<f64>,
    radius_degrees: f64,
    records: &[HazardRecord],
) -> Vec<LocatedHazard> {
    let located: Vec<LocatedHazard> = records
        .iter()
        .filter(|record| point_within_radius(record.geometry, center, radius_degrees))
        .map(|record| LocatedHazard {
            latitude: record.geometry.y(),
            longitude: record.geometry.x(),
            record: record.clone(),
        })
        .collect();

    tracing::debug!(
        "Radius filter kept {} of {} records (radius {} deg)",
        located.len(),
        records.len(),
        radius_degrees
    );

    located
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(longitude: f64, latitude: f64) -> HazardRecord {
        HazardRecord::new(Point::new(longitude, latitude))
    }

    fn record_with_attr(longitude: f64, latitude: f64, key: &str, value: &str) -> HazardRecord {
        let mut attributes = BTreeMap::new();
        attributes.insert(key.to_string(), value.to_string());
        HazardRecord {
            geometry: Point::new(longitude, latitude),
            attributes,
        }
    }

    #[test]
    fn test_nearby_point_included() {
        // center (0,0), radius 50 degrees, quake at (1,1)
        let results = filter_within_radius(Point::new(0.0, 0.0), 50.0, &[record(1.0, 1.0)]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].latitude, 1.0);
        assert_eq!(results[0].longitude, 1.0);
    }

    #[test]
    fn test_distant_point_excluded() {
        // center (0,0), radius 1 degree, quake at (80,80)
        let results = filter_within_radius(Point::new(0.0, 0.0), 1.0, &[record(80.0, 80.0)]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let results = filter_within_radius(Point::new(12.0, -34.0), 50.0, &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_boundary_point_excluded() {
        // The disk is open: a point at exactly the radius does not count.
        let results = filter_within_radius(Point::new(0.0, 0.0), 5.0, &[record(5.0, 0.0)]);
        assert!(results.is_empty());

        let just_inside = filter_within_radius(
            Point::new(0.0, 0.0),
            5.0,
            &[record(5.0 - 1e-9, 0.0)],
        );
        assert_eq!(just_inside.len(), 1);
    }

    #[test]
    fn test_zero_radius_excludes_everything() {
        let center = Point::new(3.0, 4.0);
        let results = filter_within_radius(center, 0.0, &[record(3.0, 4.0)]);
        // Distance zero is not strictly less than radius zero.
        assert!(results.is_empty());
    }

    #[test]
    fn test_monotonic_in_radius() {
        let center = Point::new(0.0, 0.0);
        let records = vec![
            record(0.5, 0.5),
            record(3.0, 0.0),
            record(0.0, -7.0),
            record(20.0, 20.0),
            record(-45.0, 10.0),
        ];

        let mut previous: Vec<LocatedHazard> = Vec::new();
        for radius in [0.0, 1.0, 5.0, 10.0, 40.0, 90.0] {
            let current = filter_within_radius(center, radius, &records);
            for kept in &previous {
                assert!(
                    current.contains(kept),
                    "enlarging the radius to {} dropped a record at ({}, {})",
                    radius,
                    kept.longitude,
                    kept.latitude
                );
            }
            previous = current;
        }
    }

    #[test]
    fn test_no_cross_record_interference() {
        let center = Point::new(0.0, 0.0);
        let outside = record(100.0, 0.0);

        let alone = filter_within_radius(center, 10.0, &[outside.clone()]);
        assert!(alone.is_empty());

        let crowded = filter_within_radius(
            center,
            10.0,
            &[record(1.0, 1.0), outside.clone(), record(-2.0, 3.0)],
        );
        assert_eq!(crowded.len(), 2);
        assert!(crowded.iter().all(|h| h.record != outside));
    }

    #[test]
    fn test_idempotent() {
        let center = Point::new(5.0, 5.0);
        let records = vec![record(4.0, 4.0), record(60.0, 0.0), record(5.5, 5.5)];

        let first = filter_within_radius(center, 3.0, &records);
        let second = filter_within_radius(center, 3.0, &records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_derived_coordinates_match_geometry() {
        let center = Point::new(0.0, 0.0);
        let records = vec![
            record(1.25, -2.5),
            record(-0.001, 0.002),
            record(10.0, 10.0),
        ];

        for hazard in filter_within_radius(center, 50.0, &records) {
            assert_eq!(hazard.latitude, hazard.record.geometry.y());
            assert_eq!(hazard.longitude, hazard.record.geometry.x());
        }
    }

    #[test]
    fn test_preserves_input_order_and_attributes() {
        let center = Point::new(0.0, 0.0);
        let records = vec![
            record_with_attr(1.0, 1.0, "magnitude", "6.1"),
            record_with_attr(2.0, 2.0, "magnitude", "4.8"),
        ];

        let results = filter_within_radius(center, 10.0, &records);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].record.attributes.get("magnitude"),
            Some(&"6.1".to_string())
        );
        assert_eq!(
            results[1].record.attributes.get("magnitude"),
            Some(&"4.8".to_string())
        );
    }

    #[test]
    fn test_source_collection_untouched() {
        let center = Point::new(0.0, 0.0);
        let records = vec![record(1.0, 1.0)];
        let snapshot = records.clone();

        let _ = filter_within_radius(center, 50.0, &records);
        assert_eq!(records, snapshot);
    }
}
