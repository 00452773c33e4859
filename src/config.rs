//! Runtime configuration for the `Wayfarer` service.
//!
//! All settings have working defaults; environment variables override them.
//! Provider base URLs are configurable so tests and local mirrors can stand
//! in for the public endpoints.

use std::env;

use crate::error::{Result, WayfarerError};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_POI_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Per-call timeouts. Geocoding and weather are quick point lookups; the
/// POI spatial query is allowed more headroom.
pub const DEFAULT_GEOCODE_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_WEATHER_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_POI_TIMEOUT_SECONDS: u64 = 25;

pub const DEFAULT_POI_RADIUS_METERS: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct WayfarerConfig {
    pub port: u16,
    pub geocode_base_url: String,
    pub weather_base_url: String,
    pub poi_base_url: String,
    pub geocode_timeout_seconds: u64,
    pub weather_timeout_seconds: u64,
    pub poi_timeout_seconds: u64,
    pub poi_radius_meters: u32,
}

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geocode_base_url: DEFAULT_GEOCODE_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            poi_base_url: DEFAULT_POI_BASE_URL.to_string(),
            geocode_timeout_seconds: DEFAULT_GEOCODE_TIMEOUT_SECONDS,
            weather_timeout_seconds: DEFAULT_WEATHER_TIMEOUT_SECONDS,
            poi_timeout_seconds: DEFAULT_POI_TIMEOUT_SECONDS,
            poi_radius_meters: DEFAULT_POI_RADIUS_METERS,
        }
    }
}

impl WayfarerConfig {
    /// Load configuration, applying `WAYFARER_*` environment overrides on
    /// top of the defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("WAYFARER_PORT") {
            config.port = port
                .parse()
                .map_err(|_| WayfarerError::ConfigError(format!("invalid WAYFARER_PORT: {port}")))?;
        }
        if let Ok(url) = env::var("WAYFARER_GEOCODE_BASE_URL") {
            config.geocode_base_url = url;
        }
        if let Ok(url) = env::var("WAYFARER_WEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        if let Ok(url) = env::var("WAYFARER_POI_BASE_URL") {
            config.poi_base_url = url;
        }
        if let Ok(radius) = env::var("WAYFARER_POI_RADIUS_METERS") {
            config.poi_radius_meters = radius.parse().map_err(|_| {
                WayfarerError::ConfigError(format!("invalid WAYFARER_POI_RADIUS_METERS: {radius}"))
            })?;
        }

        Ok(config)
    }
}
