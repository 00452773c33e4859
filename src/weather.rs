//! Weather agent: coordinates to a current-conditions snapshot.

use std::sync::Arc;

use tracing::{debug, error};

use crate::models::WeatherSnapshot;
use crate::providers::WeatherProvider;

/// Fetches a point-in-time weather reading.
///
/// Temperature and wind come from the provider's current-weather block,
/// rain chance and humidity from the first hourly sample. A missing hourly
/// series degrades those fields to zero; a failed call degrades the whole
/// snapshot to `None` so the caller can answer without weather data.
pub struct WeatherAgent {
    provider: Arc<dyn WeatherProvider>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl WeatherAgent {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, lat: f64, lon: f64) -> Option<WeatherSnapshot> {
        debug!("Fetching weather for ({}, {})", lat, lon);

        let observation = match self.provider.current_and_hourly(lat, lon).await {
            Ok(observation) => observation,
            Err(e) => {
                error!("Weather lookup failed for ({}, {}): {}", lat, lon, e);
                return None;
            }
        };

        let precipitation = observation
            .hourly_precipitation_probability
            .first()
            .copied()
            .unwrap_or(0.0);
        let humidity = observation.hourly_humidity.first().copied().unwrap_or(0.0);

        Some(WeatherSnapshot {
            temperature_celsius: round1(observation.current_temperature),
            precipitation_probability_percent: round1(precipitation),
            humidity_percent: round1(humidity),
            wind_speed_kmh: round1(observation.current_wind_speed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, WayfarerError};
    use crate::providers::WeatherObservation;
    use async_trait::async_trait;

    struct FixedProvider(WeatherObservation);

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current_and_hourly(&self, _lat: f64, _lon: f64) -> Result<WeatherObservation> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn current_and_hourly(&self, _lat: f64, _lon: f64) -> Result<WeatherObservation> {
            Err(WayfarerError::ApiError("HTTP 503".to_string()))
        }
    }

    #[tokio::test]
    async fn test_snapshot_from_observation() {
        let agent = WeatherAgent::new(Arc::new(FixedProvider(WeatherObservation {
            current_temperature: 21.34,
            current_wind_speed: 11.27,
            hourly_precipitation_probability: vec![10.0, 40.0],
            hourly_humidity: vec![65.55],
        })));

        let snapshot = agent.fetch(48.8566, 2.3522).await.unwrap();
        assert_eq!(snapshot.temperature_celsius, 21.3);
        assert_eq!(snapshot.precipitation_probability_percent, 10.0);
        assert_eq!(snapshot.humidity_percent, 65.6);
        assert_eq!(snapshot.wind_speed_kmh, 11.3);
    }

    #[tokio::test]
    async fn test_missing_hourly_series_degrades_to_zero() {
        let agent = WeatherAgent::new(Arc::new(FixedProvider(WeatherObservation {
            current_temperature: 5.0,
            current_wind_speed: 2.0,
            hourly_precipitation_probability: Vec::new(),
            hourly_humidity: Vec::new(),
        })));

        let snapshot = agent.fetch(0.0, 0.0).await.unwrap();
        assert_eq!(snapshot.precipitation_probability_percent, 0.0);
        assert_eq!(snapshot.humidity_percent, 0.0);
    }

    #[tokio::test]
    async fn test_provider_failure_yields_none() {
        let agent = WeatherAgent::new(Arc::new(FailingProvider));
        assert!(agent.fetch(0.0, 0.0).await.is_none());
    }
}
