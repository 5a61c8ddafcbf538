//! Terminal rendering of a selection outcome. Pure formatting: every
//! decision was already taken upstream.

use hazmap_geo::LocatedHazard;
use hazmap_weather::WeatherSummary;

use crate::session::SelectionOutcome;

/// Formatted weather block for one country.
pub fn weather_block(country: &str, summary: &WeatherSummary) -> String {
    format!(
        "Weather in {}:\n  Temperature: {} C\n  Humidity: {}%\n  Conditions: {}\n  Wind speed: {} m/s",
        country,
        summary.temperature_c,
        summary.humidity_pct,
        summary.condition,
        summary.wind_speed_ms,
    )
}

/// Formatted section for one filtered hazard collection. An empty
/// collection renders an informational line, not a warning.
pub fn hazard_section(label: &str, hazards: &[LocatedHazard]) -> String {
    if hazards.is_empty() {
        return format!("No {} found in the selected area.", label);
    }

    let mut out = format!("{} in the selected area: {}", capitalize(label), hazards.len());
    for hazard in hazards {
        out.push_str(&format!("\n  ({}, {})", hazard.latitude, hazard.longitude));
    }
    out
}

/// Print the full report for one selection.
pub fn print_report(outcome: &SelectionOutcome) {
    let Some(_center) = outcome.center else {
        println!("Could not find coordinates for {}", outcome.country);
        return;
    };

    if let Some(summary) = &outcome.weather {
        println!("{}", weather_block(&outcome.country, summary));
    } else if let Some(note) = &outcome.weather_error {
        println!("{}", note);
    }

    println!("{}", hazard_section("earthquakes", &outcome.earthquakes));
    println!("{}", hazard_section("tsunamis", &outcome.tsunamis));
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use geo::Point;
    use hazmap_geo::HazardRecord;

    fn located(longitude: f64, latitude: f64) -> LocatedHazard {
        LocatedHazard {
            latitude,
            longitude,
            record: HazardRecord::new(Point::new(longitude, latitude)),
        }
    }

    fn summary() -> WeatherSummary {
        WeatherSummary {
            temperature_c: 21.5,
            humidity_pct: 60,
            condition: "scattered clouds".to_string(),
            wind_speed_ms: 4.2,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_weather_block_contains_all_fields() {
        let block = weather_block("Japan", &summary());
        assert!(block.contains("Weather in Japan"));
        assert!(block.contains("21.5 C"));
        assert!(block.contains("60%"));
        assert!(block.contains("scattered clouds"));
        assert!(block.contains("4.2 m/s"));
    }

    #[test]
    fn test_hazard_section_lists_every_record() {
        let section = hazard_section("earthquakes", &[located(139.7, 35.7), located(140.1, 36.2)]);
        assert!(section.starts_with("Earthquakes in the selected area: 2"));
        assert!(section.contains("(35.7, 139.7)"));
        assert!(section.contains("(36.2, 140.1)"));
    }

    #[test]
    fn test_empty_hazard_section_is_informational() {
        let section = hazard_section("tsunamis", &[]);
        assert_eq!(section, "No tsunamis found in the selected area.");
    }
}
