//! `Wayfarer` - travel question answering service
//!
//! This library turns free-text travel questions ("I am going to Bangalore,
//! what's the weather?") into a composed answer by resolving the place name,
//! then fetching current weather and nearby attractions from independent
//! providers.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod gazetteer;
pub mod geo;
pub mod models;
pub mod orchestrator;
pub mod places;
pub mod providers;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::WayfarerConfig;
pub use error::WayfarerError;
pub use extract::extract_place_name;
pub use geo::GeocodingAgent;
pub use models::{
    Coordinates, GeoResolution, PoiCategory, PointOfInterest, QueryResult, ResolvedPlace,
    WeatherSnapshot,
};
pub use orchestrator::Orchestrator;
pub use places::PlacesAgent;
pub use weather::WeatherAgent;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WayfarerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
