//! Open-Meteo weather client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{WeatherObservation, WeatherProvider};
use crate::error::{Result, WayfarerError};

pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Forecast response from `OpenMeteo`, reduced to the fields we request
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    hourly: Option<HourlyData>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
}

/// Hourly series. Individual samples can be null, series can be absent.
#[derive(Debug, Deserialize)]
struct HourlyData {
    precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(rename = "relativehumidity_2m")]
    relative_humidity: Option<Vec<Option<f64>>>,
}

impl OpenMeteoClient {
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

fn flatten_series(series: Option<Vec<Option<f64>>>) -> Vec<f64> {
    series
        .unwrap_or_default()
        .into_iter()
        .map(|sample| sample.unwrap_or(0.0))
        .collect()
}

#[async_trait::async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current_and_hourly(&self, lat: f64, lon: f64) -> Result<WeatherObservation> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current_weather", "true".to_string()),
                (
                    "hourly",
                    "temperature_2m,precipitation_probability,relativehumidity_2m,windspeed_10m"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_hours", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WayfarerError::ApiError(format!(
                "Open-Meteo returned {}",
                response.status()
            )));
        }

        let forecast: ForecastResponse = response.json().await?;

        let (current_temperature, current_wind_speed) = forecast
            .current_weather
            .map_or((0.0, 0.0), |current| (current.temperature, current.windspeed));

        let (hourly_precipitation_probability, hourly_humidity) = match forecast.hourly {
            Some(hourly) => (
                flatten_series(hourly.precipitation_probability),
                flatten_series(hourly.relative_humidity),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Ok(WeatherObservation {
            current_temperature,
            current_wind_speed,
            hourly_precipitation_probability,
            hourly_humidity,
        })
    }
}
