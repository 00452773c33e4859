//! Outbound data providers.
//!
//! Each provider capability is a small async trait so the pipeline can be
//! driven by stub implementations in tests. The concrete clients talk to
//! Nominatim (geocoding), Open-Meteo (weather) and Overpass (points of
//! interest), each with its own request timeout and no retries.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

pub mod nominatim;
pub mod open_meteo;
pub mod overpass;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoClient;
pub use overpass::OverpassClient;

/// One geocoding candidate as returned by the provider
#[derive(Debug, Clone)]
pub struct GeocodeCandidate {
    pub lat: f64,
    pub lon: f64,
    pub display_name: Option<String>,
}

/// Raw weather reading: current block plus short-range hourly series
#[derive(Debug, Clone, Default)]
pub struct WeatherObservation {
    pub current_temperature: f64,
    pub current_wind_speed: f64,
    pub hourly_precipitation_probability: Vec<f64>,
    pub hourly_humidity: Vec<f64>,
}

/// One spatial element from the POI provider, reduced to its tag map
#[derive(Debug, Clone)]
pub struct PoiElement {
    pub tags: HashMap<String, String>,
}

#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Look up a place name, best match first
    async fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions and near-term hourly series for a point
    async fn current_and_hourly(&self, lat: f64, lon: f64) -> Result<WeatherObservation>;
}

#[async_trait]
pub trait PoiProvider: Send + Sync {
    /// Find tagged attractions within `radius_meters` of a point
    async fn search(&self, lat: f64, lon: f64, radius_meters: u32) -> Result<Vec<PoiElement>>;
}
