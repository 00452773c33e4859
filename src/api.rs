//! HTTP API surface.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::models::QueryResult;
use crate::orchestrator::Orchestrator;

#[derive(Debug, Deserialize)]
pub struct TourismQuery {
    pub place: String,
}

pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/tourism/query", post(query_tourism))
        .with_state(orchestrator)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Wayfarer Travel API" }))
}

/// Main query endpoint: free text in, composed answer out. Empty input is
/// rejected before the pipeline runs.
async fn query_tourism(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(query): Json<TourismQuery>,
) -> Result<Json<QueryResult>, (StatusCode, Json<Value>)> {
    let text = query.place.trim();
    if text.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Place name cannot be empty" })),
        ));
    }

    Ok(Json(orchestrator.answer(text).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, WayfarerError};
    use crate::geo::GeocodingAgent;
    use crate::places::PlacesAgent;
    use crate::providers::{
        GeocodeCandidate, GeocodeProvider, PoiElement, PoiProvider, WeatherObservation,
        WeatherProvider,
    };
    use crate::weather::WeatherAgent;
    use async_trait::async_trait;

    struct DownGeocoder;

    #[async_trait]
    impl GeocodeProvider for DownGeocoder {
        async fn search(&self, _query: &str) -> Result<Vec<GeocodeCandidate>> {
            Err(WayfarerError::NetworkError("offline".to_string()))
        }
    }

    struct DownWeather;

    #[async_trait]
    impl WeatherProvider for DownWeather {
        async fn current_and_hourly(&self, _lat: f64, _lon: f64) -> Result<WeatherObservation> {
            Err(WayfarerError::NetworkError("offline".to_string()))
        }
    }

    struct DownPoi;

    #[async_trait]
    impl PoiProvider for DownPoi {
        async fn search(&self, _lat: f64, _lon: f64, _radius: u32) -> Result<Vec<PoiElement>> {
            Err(WayfarerError::NetworkError("offline".to_string()))
        }
    }

    fn offline_orchestrator() -> Arc<Orchestrator> {
        Arc::new(Orchestrator::new(
            GeocodingAgent::new(Arc::new(DownGeocoder)),
            WeatherAgent::new(Arc::new(DownWeather)),
            PlacesAgent::new(Arc::new(DownPoi)),
            10_000,
        ))
    }

    #[tokio::test]
    async fn test_empty_place_is_rejected_before_pipeline() {
        let result = query_tourism(
            State(offline_orchestrator()),
            Json(TourismQuery {
                place: "   ".to_string(),
            }),
        )
        .await;

        let (status, Json(body)) = result.err().expect("expected a rejection");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Place name cannot be empty");
    }

    #[tokio::test]
    async fn test_query_returns_structured_result() {
        let result = query_tourism(
            State(offline_orchestrator()),
            Json(TourismQuery {
                place: "weather in Paris".to_string(),
            }),
        )
        .await;

        let Json(payload) = result.expect("handler should not reject non-empty input");
        assert!(!payload.success);
        assert!(payload.message.contains("Paris"));
    }
}
