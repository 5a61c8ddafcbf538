//! Integration tests for the boundary catalog fetcher using wiremock.

use hazmap_geo::{fetch_catalog, CatalogError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn world_countries() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Squareland"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Islandia"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 10.0]]]]
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_fetch_catalog_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/world-countries.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(world_countries()))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/world-countries.json", mock_server.uri());
    let catalog = fetch_catalog(&client, &url).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Squareland");
    assert_eq!(catalog[1].name, "Islandia");
}

#[tokio::test]
async fn test_fetch_catalog_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/world-countries.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/world-countries.json", mock_server.uri());
    let err = fetch_catalog(&client, &url).await.unwrap_err();

    assert!(matches!(err, CatalogError::Status(404)));
}

#[tokio::test]
async fn test_fetch_catalog_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/world-countries.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not geojson</html>"))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/world-countries.json", mock_server.uri());
    let err = fetch_catalog(&client, &url).await.unwrap_err();

    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_catalog_unreachable_server() {
    // Nothing is listening on this port.
    let client = reqwest::Client::new();
    let err = fetch_catalog(&client, "http://127.0.0.1:9/world-countries.json")
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Network(_)));
}
