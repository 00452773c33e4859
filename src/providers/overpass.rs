//! Overpass API client for spatial point-of-interest queries.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{PoiElement, PoiProvider};
use crate::error::{Result, WayfarerError};

pub struct OverpassClient {
    client: Client,
    base_url: String,
    timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("Wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WayfarerError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout_seconds,
        })
    }

    /// Overpass QL query for attraction-like nodes and ways around a point:
    /// anything tagged tourism or historic, cultural amenities, and
    /// park/garden leisure areas.
    fn build_query(&self, lat: f64, lon: f64, radius_meters: u32) -> String {
        let around = format!("(around:{radius_meters},{lat},{lon})");
        format!(
            "[out:json][timeout:{timeout}];\n\
             (\n\
               node[\"tourism\"]{around};\n\
               node[\"historic\"]{around};\n\
               node[\"amenity\"~\"museum|gallery|theatre\"]{around};\n\
               node[\"leisure\"~\"park|garden\"]{around};\n\
               way[\"tourism\"]{around};\n\
               way[\"historic\"]{around};\n\
               way[\"amenity\"~\"museum|gallery|theatre\"]{around};\n\
               way[\"leisure\"~\"park|garden\"]{around};\n\
             );\n\
             out body;\n\
             >;\n\
             out skel qt;",
            timeout = self.timeout_seconds,
        )
    }
}

#[async_trait::async_trait]
impl PoiProvider for OverpassClient {
    async fn search(&self, lat: f64, lon: f64, radius_meters: u32) -> Result<Vec<PoiElement>> {
        let query = self.build_query(lat, lon, radius_meters);

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WayfarerError::ApiError(format!(
                "Overpass returned {}",
                response.status()
            )));
        }

        let body: OverpassResponse = response.json().await?;

        Ok(body
            .elements
            .into_iter()
            .map(|element| PoiElement { tags: element.tags })
            .collect())
    }
}
