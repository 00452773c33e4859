//! Nominatim geocoding client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{GeocodeCandidate, GeocodeProvider};
use crate::error::{Result, WayfarerError};

pub struct NominatimClient {
    client: Client,
    base_url: String,
}

/// Nominatim search result. Coordinates arrive as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("Wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WayfarerError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl GeocodeProvider for NominatimClient {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WayfarerError::ApiError(format!(
                "Nominatim returned {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await?;

        places
            .into_iter()
            .map(|place| {
                let lat = place.lat.parse::<f64>().map_err(|_| {
                    WayfarerError::ParseError(format!("bad latitude from Nominatim: {}", place.lat))
                })?;
                let lon = place.lon.parse::<f64>().map_err(|_| {
                    WayfarerError::ParseError(format!("bad longitude from Nominatim: {}", place.lon))
                })?;
                Ok(GeocodeCandidate {
                    lat,
                    lon,
                    display_name: place.display_name,
                })
            })
            .collect()
    }
}
