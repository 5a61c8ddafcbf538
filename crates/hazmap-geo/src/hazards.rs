//! Hazard dataset loading.
//!
//! Earthquake and tsunami events arrive as point shapefiles. Both
//! collections are read once at session start and share [`HazardRecord`]
//! so the radius filter treats them identically.

use shapefile::dbase::FieldValue;
use shapefile::Shape;
use std::path::Path;

use crate::error::DatasetError;
use crate::types::HazardRecord;

/// Read a point shapefile into hazard records, in file order.
///
/// Point, PointM and PointZ shapes are accepted; other shape types are
/// skipped with a warning. DBF attributes are carried along as strings.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened or read.
pub fn load_hazards(path: &Path) -> Result<Vec<HazardRecord>, DatasetError> {
    let mut reader = shapefile::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for entry in reader.iter_shapes_and_records() {
        let (shape, attributes) = entry?;

        let geometry = match shape {
            Shape::Point(p) => geo::Point::new(p.x, p.y),
            Shape::PointM(p) => geo::Point::new(p.x, p.y),
            Shape::PointZ(p) => geo::Point::new(p.x, p.y),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let attributes = attributes
            .into_iter()
            .map(|(name, value)| (name, field_value_to_string(&value)))
            .collect();

        records.push(HazardRecord {
            geometry,
            attributes,
        });
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} non-point shapes in {}",
            skipped,
            path.display()
        );
    }
    tracing::info!("Loaded {} hazard records from {}", records.len(), path.display());

    Ok(records)
}

fn field_value_to_string(value: &FieldValue) -> String {
    match value {
        FieldValue::Character(Some(s)) => s.clone(),
        FieldValue::Character(None) => String::new(),
        FieldValue::Numeric(Some(n)) => n.to_string(),
        FieldValue::Numeric(None) => String::new(),
        FieldValue::Float(Some(f)) => f.to_string(),
        FieldValue::Float(None) => String::new(),
        FieldValue::Integer(i) => i.to_string(),
        FieldValue::Logical(Some(b)) => b.to_string(),
        FieldValue::Logical(None) => String::new(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_an_error() {
        let path = PathBuf::from("does/not/exist.shp");
        assert!(load_hazards(&path).is_err());
    }

    #[test]
    fn test_field_value_stringification() {
        let cases = [
            (FieldValue::Character(Some("Honshu".to_string())), "Honshu"),
            (FieldValue::Character(None), ""),
            (FieldValue::Numeric(Some(7.2)), "7.2"),
            (FieldValue::Numeric(None), ""),
            (FieldValue::Integer(1923), "1923"),
            (FieldValue::Logical(Some(true)), "true"),
        ];

        for (value, expected) in cases {
            assert_eq!(field_value_to_string(&value), expected);
        }
    }
}
