//! Core data types shared across the query pipeline.

use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A place resolved by the geocoding provider
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub coordinates: Coordinates,
    /// Provider's best-match display name, e.g. "Paris, Île-de-France, France"
    pub display_name: String,
}

/// Outcome of a geocoding lookup.
///
/// `NotFound` is a normal user-facing outcome; `Error` means the provider
/// could not be consulted at all (cause already logged by the agent).
#[derive(Debug, Clone, PartialEq)]
pub enum GeoResolution {
    Found(ResolvedPlace),
    NotFound,
    Error,
}

/// Point-in-time weather reading for one set of coordinates.
///
/// Values are rounded to one decimal place. Fields sourced from hourly
/// series degrade to 0.0 when the provider omits the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub precipitation_probability_percent: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
}

/// Category of a point of interest, derived from provider tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoiCategory {
    #[serde(rename = "Museum & Gallery")]
    MuseumGallery,
    #[serde(rename = "Attraction & Entertainment")]
    AttractionEntertainment,
    #[serde(rename = "Wildlife & Nature")]
    WildlifeNature,
    #[serde(rename = "Landmark & Viewpoint")]
    LandmarkViewpoint,
    #[serde(rename = "Historic Site")]
    HistoricSite,
    #[serde(rename = "Arts & Culture")]
    ArtsCulture,
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Park & Nature")]
    ParkNature,
    #[serde(rename = "Sports & Recreation")]
    SportsRecreation,
    #[serde(rename = "Religious Site")]
    ReligiousSite,
    #[serde(rename = "Tourist Attraction")]
    TouristAttraction,
}

impl PoiCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PoiCategory::MuseumGallery => "Museum & Gallery",
            PoiCategory::AttractionEntertainment => "Attraction & Entertainment",
            PoiCategory::WildlifeNature => "Wildlife & Nature",
            PoiCategory::LandmarkViewpoint => "Landmark & Viewpoint",
            PoiCategory::HistoricSite => "Historic Site",
            PoiCategory::ArtsCulture => "Arts & Culture",
            PoiCategory::FoodDining => "Food & Dining",
            PoiCategory::ParkNature => "Park & Nature",
            PoiCategory::SportsRecreation => "Sports & Recreation",
            PoiCategory::ReligiousSite => "Religious Site",
            PoiCategory::TouristAttraction => "Tourist Attraction",
        }
    }
}

/// A named attraction near the resolved coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Trimmed name, unique within one result set
    pub name: String,
    pub category: PoiCategory,
    pub description: String,
    pub wikipedia_url: String,
    pub image_url: String,
}

/// The composed answer returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub success: bool,
    pub message: String,
    pub place: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub places_data: Vec<PointOfInterest>,
}
