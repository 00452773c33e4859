//! Geocoding agent: place name to coordinates.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::models::{Coordinates, GeoResolution, ResolvedPlace};
use crate::providers::GeocodeProvider;

/// Resolves a place name through a geocoding provider.
///
/// A single attempt per query; provider failures are logged here and
/// collapse to `GeoResolution::Error` rather than propagating.
pub struct GeocodingAgent {
    provider: Arc<dyn GeocodeProvider>,
}

impl GeocodingAgent {
    pub fn new(provider: Arc<dyn GeocodeProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, place_name: &str) -> GeoResolution {
        debug!("Geocoding place name: {}", place_name);

        let candidates = match self.provider.search(place_name).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Geocoding lookup failed for '{}': {}", place_name, e);
                return GeoResolution::Error;
            }
        };

        let Some(best) = candidates.into_iter().next() else {
            info!("No geocoding results for '{}'", place_name);
            return GeoResolution::NotFound;
        };

        let display_name = best
            .display_name
            .unwrap_or_else(|| place_name.to_string());

        info!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            place_name, display_name, best.lat, best.lon
        );

        GeoResolution::Found(ResolvedPlace {
            coordinates: Coordinates {
                lat: best.lat,
                lon: best.lon,
            },
            display_name,
        })
    }
}
