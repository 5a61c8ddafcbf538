//! Boundary catalog loading.
//!
//! The catalog is a remote GeoJSON feature collection of country outlines,
//! fetched once per session. Each feature needs a `name` property and an
//! areal geometry; anything else is skipped with a warning so one odd
//! feature cannot take down the whole catalog.

use geo::Geometry;
use geojson::GeoJson;
use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::BoundaryFeature;

/// Fetch and parse the boundary catalog from `url`.
///
/// # Errors
///
/// Returns [`CatalogError`] if the request fails, the server responds with
/// a non-success status, or the body is not a usable feature collection.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<BoundaryFeature>, CatalogError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    let catalog = parse_catalog(&body)?;

    tracing::info!("Loaded {} boundary features from catalog", catalog.len());
    Ok(catalog)
}

/// Parse a GeoJSON feature collection into boundary features, in document
/// order. Duplicate names keep the first occurrence, so each dropdown
/// entry maps to exactly one polygon.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the text is not a GeoJSON feature
/// collection.
pub fn parse_catalog(text: &str) -> Result<Vec<BoundaryFeature>, CatalogError> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| CatalogError::Parse(e.to_string()))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(CatalogError::Parse(
            "expected a FeatureCollection".to_string(),
        ));
    };

    let mut seen = HashSet::new();
    let mut features = Vec::new();

    for feature in collection.features {
        let Some(name) = feature
            .properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
        else {
            tracing::warn!("Skipping boundary feature without a name property");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            tracing::warn!("Skipping boundary '{}': no geometry", name);
            continue;
        };

        let geometry: Geometry<f64> = match geometry.value.try_into() {
            Ok(g) => g,
            Err(e) => {
                tracing::warn!("Skipping boundary '{}': {}", name, e);
                continue;
            }
        };

        let multi_polygon = match geometry {
            Geometry::Polygon(polygon) => polygon.into(),
            Geometry::MultiPolygon(multi) => multi,
            _ => {
                tracing::warn!("Skipping boundary '{}': not an areal geometry", name);
                continue;
            }
        };

        if !seen.insert(name.clone()) {
            tracing::warn!("Skipping duplicate boundary name '{}'", name);
            continue;
        }

        features.push(BoundaryFeature {
            name,
            geometry: multi_polygon,
        });
    }

    Ok(features)
}
