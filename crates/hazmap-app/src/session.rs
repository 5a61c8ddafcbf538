//! The interactive session: load everything once, then serve selections
//! until the user picks the empty option.
//!
//! Catalogs are loaded at startup and passed by reference into every
//! selection, so each selection is a pure function of (catalogs, center,
//! radius) and repeated selections cannot interfere with each other.

use dialoguer::{Password, Select};
use std::time::Duration;

use hazmap_core::{AppError, Config};
use hazmap_geo::{
    fetch_catalog, filter_within_radius, load_hazards, BoundaryFeature, GeoPoint, HazardRecord,
    LocatedHazard,
};
use hazmap_weather::{Geocoder, WeatherClient, WeatherSummary};

use crate::{map, report};

/// Session-wide immutable catalogs, loaded once at startup.
pub struct SessionData {
    pub boundaries: Vec<BoundaryFeature>,
    pub earthquakes: Vec<HazardRecord>,
    pub tsunamis: Vec<HazardRecord>,
}

/// Everything one selection produced, ready for rendering.
pub struct SelectionOutcome {
    pub country: String,
    /// `None` means the geocoder had no match; all downstream steps were
    /// skipped.
    pub center: Option<GeoPoint>,
    pub weather: Option<WeatherSummary>,
    /// User-facing note when a weather fetch was attempted and failed.
    pub weather_error: Option<String>,
    pub earthquakes: Vec<LocatedHazard>,
    pub tsunamis: Vec<LocatedHazard>,
}

/// Run the interactive session loop.
///
/// # Errors
///
/// Returns [`AppError`] only for startup failures that make the session
/// impossible: unreadable hazard datasets, an unusable boundary catalog,
/// or a map file that cannot be written. Per-selection failures are
/// reported to the user and never end the session.
pub async fn run(config: &Config) -> Result<(), AppError> {
    let api_key = prompt_credential();
    if api_key.is_none() {
        println!("No API key entered; weather will not be shown.");
    }

    let earthquakes =
        load_hazards(&config.datasets.earthquakes).map_err(AppError::dataset)?;
    let tsunamis = load_hazards(&config.datasets.tsunamis).map_err(AppError::dataset)?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(AppError::catalog)?;
    let boundaries = fetch_catalog(&http, &config.catalog.url)
        .await
        .map_err(AppError::catalog)?;

    let data = SessionData {
        boundaries,
        earthquakes,
        tsunamis,
    };

    map::write_map(&config.map.output, &data.boundaries, &[], &[])?;
    println!("Base map written to {}", config.map.output.display());

    let weather_client = match api_key {
        Some(key) => match WeatherClient::new(&key) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Could not create weather client: {}", e);
                println!("{}", e.user_message());
                None
            }
        },
        None => None,
    };

    let geocoder = match Geocoder::new() {
        Ok(g) => g,
        Err(e) => return Err(AppError::Other(e.into())),
    };

    loop {
        let Some(country) = prompt_country(&data.boundaries) else {
            break;
        };

        let outcome = run_selection(
            &geocoder,
            weather_client.as_ref(),
            &data,
            config.filter.radius_degrees,
            &country,
        )
        .await;

        report::print_report(&outcome);

        if outcome.center.is_some() {
            map::write_map(
                &config.map.output,
                &data.boundaries,
                &outcome.earthquakes,
                &outcome.tsunamis,
            )?;
            println!("Map updated: {}", config.map.output.display());
        }
    }

    Ok(())
}

/// Handle one country selection: geocode once, then run the weather fetch
/// and both radius filters against that single resolved point.
pub async fn run_selection(
    geocoder: &Geocoder,
    weather_client: Option<&WeatherClient>,
    data: &SessionData,
    radius_degrees: f64,
    country: &str,
) -> SelectionOutcome {
    let mut outcome = SelectionOutcome {
        country: country.to_string(),
        center: None,
        weather: None,
        weather_error: None,
        earthquakes: Vec::new(),
        tsunamis: Vec::new(),
    };

    let Some(center) = geocoder.resolve(country).await else {
        return outcome;
    };
    outcome.center = Some(center);

    // Weather and filtering are independent once the geocode is done, and
    // both must see the same resolved point.
    let point = center.to_point();
    let weather_step = async {
        match weather_client {
            Some(client) => Some(client.fetch(center).await),
            None => None,
        }
    };
    let filter_step = async {
        (
            filter_within_radius(point, radius_degrees, &data.earthquakes),
            filter_within_radius(point, radius_degrees, &data.tsunamis),
        )
    };
    let (weather_result, (earthquakes, tsunamis)) = tokio::join!(weather_step, filter_step);

    match weather_result {
        Some(Ok(summary)) => outcome.weather = Some(summary),
        Some(Err(e)) => {
            tracing::warn!("Weather fetch failed for '{}': {}", country, e);
            outcome.weather_error = Some(e.user_message().to_string());
        }
        None => {}
    }

    outcome.earthquakes = earthquakes;
    outcome.tsunamis = tsunamis;
    outcome
}

/// Prompt for the weather API key, masked. Empty input means "no weather
/// this session"; the key is never persisted.
fn prompt_credential() -> Option<String> {
    let entered = Password::new()
        .with_prompt("OpenWeatherMap API key (leave empty to skip weather)")
        .allow_empty_password(true)
        .interact()
        .unwrap_or_default();

    if entered.trim().is_empty() {
        None
    } else {
        Some(entered)
    }
}

/// Country dropdown with a leading empty option. Returns `None` when the
/// user picks the empty option (or the terminal interaction fails).
fn prompt_country(boundaries: &[BoundaryFeature]) -> Option<String> {
    let mut items: Vec<&str> = vec!["(no selection - quit)"];
    items.extend(boundaries.iter().map(|b| b.name.as_str()));

    let choice = Select::new()
        .with_prompt("Select a country")
        .items(&items)
        .default(0)
        .interact()
        .ok()?;

    if choice == 0 {
        None
    } else {
        Some(boundaries[choice - 1].name.clone())
    }
}
