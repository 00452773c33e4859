//! Query orchestration: extraction, geocoding, then concurrent weather and
//! attraction lookups composed into one answer.
//!
//! Failure policy: geocoding failure ends the query (weather and POI are
//! never attempted); weather or POI failure only degrades its own sentence
//! of the composed message.

use std::sync::Arc;

use tracing::info;

use crate::config::WayfarerConfig;
use crate::extract::extract_place_name;
use crate::geo::GeocodingAgent;
use crate::models::{GeoResolution, PointOfInterest, QueryResult, WeatherSnapshot};
use crate::places::PlacesAgent;
use crate::providers::{NominatimClient, OpenMeteoClient, OverpassClient};
use crate::weather::WeatherAgent;

pub struct Orchestrator {
    geo: GeocodingAgent,
    weather: WeatherAgent,
    places: PlacesAgent,
    poi_radius_meters: u32,
}

/// Format a reading without a trailing ".0" so whole numbers print bare
/// ("10", "21.3")
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

fn weather_sentence(display_name: &str, snapshot: Option<&WeatherSnapshot>) -> String {
    match snapshot {
        Some(snapshot) => format!(
            "In {} it's currently {}°C with a chance of {}% to rain.",
            display_name,
            format_reading(snapshot.temperature_celsius),
            format_reading(snapshot.precipitation_probability_percent),
        ),
        None => format!("Weather information for {display_name} is currently unavailable."),
    }
}

fn places_sentence(places: Option<&[PointOfInterest]>) -> String {
    match places {
        Some([]) => "There are no specific tourist attractions found nearby.".to_string(),
        Some(places) => {
            let names: Vec<&str> = places.iter().map(|place| place.name.as_str()).collect();
            format!(
                "And these are the places you can go:\n{}",
                names.join("\n")
            )
        }
        None => "Attraction information is currently unavailable.".to_string(),
    }
}

impl Orchestrator {
    pub fn new(
        geo: GeocodingAgent,
        weather: WeatherAgent,
        places: PlacesAgent,
        poi_radius_meters: u32,
    ) -> Self {
        Self {
            geo,
            weather,
            places,
            poi_radius_meters,
        }
    }

    /// Wire up the live provider clients described by the configuration
    pub fn from_config(config: &WayfarerConfig) -> crate::error::Result<Self> {
        let geocoder = NominatimClient::new(
            config.geocode_base_url.as_str(),
            config.geocode_timeout_seconds,
        )?;
        let weather = OpenMeteoClient::new(
            config.weather_base_url.as_str(),
            config.weather_timeout_seconds,
        )?;
        let poi = OverpassClient::new(config.poi_base_url.as_str(), config.poi_timeout_seconds)?;

        Ok(Self::new(
            GeocodingAgent::new(Arc::new(geocoder)),
            WeatherAgent::new(Arc::new(weather)),
            PlacesAgent::new(Arc::new(poi)),
            config.poi_radius_meters,
        ))
    }

    /// Answer a free-text travel question.
    ///
    /// Always returns a structured result; `success` reflects only whether
    /// the place could be resolved.
    pub async fn answer(&self, raw_text: &str) -> QueryResult {
        let place_name = extract_place_name(raw_text);
        info!("Handling query for place '{}'", place_name);

        let resolved = match self.geo.resolve(&place_name).await {
            GeoResolution::Found(place) => place,
            GeoResolution::NotFound | GeoResolution::Error => {
                return QueryResult {
                    success: false,
                    message: format!(
                        "I don't know if the place '{place_name}' exists. Please try a different location."
                    ),
                    place: None,
                    coordinates: None,
                    places_data: Vec::new(),
                };
            }
        };

        let lat = resolved.coordinates.lat;
        let lon = resolved.coordinates.lon;

        // Independent lookups; one failing must not block or cancel the other.
        let (snapshot, places) = tokio::join!(
            self.weather.fetch(lat, lon),
            self.places.fetch(lat, lon, self.poi_radius_meters),
        );

        let message = format!(
            "{} {}",
            weather_sentence(&resolved.display_name, snapshot.as_ref()),
            places_sentence(places.as_deref()),
        );

        QueryResult {
            success: true,
            message,
            place: Some(resolved.display_name),
            coordinates: Some(resolved.coordinates),
            places_data: places.unwrap_or_default(),
        }
    }
}
