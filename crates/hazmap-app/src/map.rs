//! Leaflet map export.
//!
//! Writes one self-contained HTML file: every boundary polygon with its
//! name as tooltip and popup, plus circle markers for the filtered
//! earthquake and tsunami records. Rewritten on every selection.

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use std::path::Path;

use hazmap_geo::{BoundaryFeature, LocatedHazard};

const QUAKE_COLOR: &str = "#d32f2f";
const TSUNAMI_COLOR: &str = "#1976d2";

const MAP_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>hazmap</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map('map').setView([0, 0], 2);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    var boundaries = __BOUNDARIES__;
    L.geoJSON(boundaries, {
      style: function () {
        return { fillColor: '#ffaf00', fillOpacity: 0.1, color: 'black', weight: 1 };
      },
      onEachFeature: function (feature, layer) {
        layer.bindTooltip(feature.properties.name);
        layer.bindPopup(feature.properties.name);
      }
    }).addTo(map);

    function addMarkers(points, color) {
      points.forEach(function (p) {
        L.circleMarker([p.lat, p.lon], { radius: 5, color: color, fillOpacity: 0.8 })
          .bindPopup(p.label)
          .addTo(map);
      });
    }
    addMarkers(__QUAKES__, '__QUAKE_COLOR__');
    addMarkers(__TSUNAMIS__, '__TSUNAMI_COLOR__');
  </script>
</body>
</html>
"#;

/// Render the full map document as a string.
pub fn render_map(
    boundaries: &[BoundaryFeature],
    earthquakes: &[LocatedHazard],
    tsunamis: &[LocatedHazard],
) -> String {
    MAP_TEMPLATE
        .replace("__BOUNDARIES__", &boundaries_geojson(boundaries))
        .replace("__QUAKES__", &markers_json(earthquakes))
        .replace("__TSUNAMIS__", &markers_json(tsunamis))
        .replace("__QUAKE_COLOR__", QUAKE_COLOR)
        .replace("__TSUNAMI_COLOR__", TSUNAMI_COLOR)
}

/// Render and write the map to `path`.
///
/// # Errors
///
/// Returns an IO error if the file cannot be written.
pub fn write_map(
    path: &Path,
    boundaries: &[BoundaryFeature],
    earthquakes: &[LocatedHazard],
    tsunamis: &[LocatedHazard],
) -> std::io::Result<()> {
    let html = render_map(boundaries, earthquakes, tsunamis);
    std::fs::write(path, html)?;
    tracing::debug!(
        "Wrote map with {} boundaries, {} quake markers, {} tsunami markers",
        boundaries.len(),
        earthquakes.len(),
        tsunamis.len()
    );
    Ok(())
}

fn boundaries_geojson(boundaries: &[BoundaryFeature]) -> String {
    let features = boundaries
        .iter()
        .map(|boundary| {
            let mut properties = JsonObject::new();
            properties.insert(
                "name".to_string(),
                serde_json::Value::String(boundary.name.clone()),
            );
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &boundary.geometry,
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
    .to_string()
}

fn markers_json(hazards: &[LocatedHazard]) -> String {
    let markers: Vec<serde_json::Value> = hazards
        .iter()
        .map(|hazard| {
            serde_json::json!({
                "lat": hazard.latitude,
                "lon": hazard.longitude,
                "label": marker_label(hazard),
            })
        })
        .collect();

    serde_json::Value::Array(markers).to_string()
}

fn marker_label(hazard: &LocatedHazard) -> String {
    if hazard.record.attributes.is_empty() {
        return format!("({}, {})", hazard.latitude, hazard.longitude);
    }

    hazard
        .record
        .attributes
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}
