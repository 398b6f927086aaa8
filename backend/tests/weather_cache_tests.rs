//! Weather cache integration tests
//!
//! Exercises the fetch-or-serve-cached contract against a mock provider:
//! a fresh entry suppresses upstream calls, an expired window triggers
//! exactly one refetch, and raw coordinate strings key distinct entries.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agripredict_backend::services::WeatherService;
use shared::RawCoordinates;

fn current_body() -> serde_json::Value {
    json!({
        "main": {"temp": 28.5, "humidity": 55.0, "pressure": 1012.0},
        "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}],
        "wind": {"speed": 3.2},
        "name": "Pune"
    })
}

fn forecast_body() -> serde_json::Value {
    json!({
        "list": [
            {"dt": 1700000000, "main": {"temp": 27.0, "humidity": 60.0}, "pop": 0.1}
        ]
    })
}

async fn mock_provider(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn service(server: &MockServer, ttl_minutes: i64) -> WeatherService {
    WeatherService::new("test-key".to_string(), server.uri(), ttl_minutes, 16)
}

#[tokio::test]
async fn second_request_within_window_hits_cache() {
    let server = MockServer::start().await;
    mock_provider(&server, 1).await;

    let service = service(&server, 10);
    let coords = RawCoordinates::new("18.52", "73.85");

    let first = service.get_weather(&coords).await.unwrap();
    let second = service.get_weather(&coords).await.unwrap();

    // Byte-identical payloads, and the mock's expect(1) verifies no second
    // upstream call happened.
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(service.cached_entries().await, 1);
}

#[tokio::test]
async fn expired_window_triggers_exactly_one_refetch() {
    let server = MockServer::start().await;
    mock_provider(&server, 2).await;

    // Zero-minute window: every request is already expired.
    let service = service(&server, 0);
    let coords = RawCoordinates::new("18.52", "73.85");

    let first = service.get_weather(&coords).await.unwrap();
    let second = service.get_weather(&coords).await.unwrap();

    assert!(second.timestamp >= first.timestamp);
    assert_eq!(service.cached_entries().await, 1);
}

#[tokio::test]
async fn distinct_raw_coordinates_fetch_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "12.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "12.00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(2)
        .mount(&server)
        .await;

    let service = service(&server, 10);
    service
        .get_weather(&RawCoordinates::new("12.0", "77.5"))
        .await
        .unwrap();
    service
        .get_weather(&RawCoordinates::new("12.00", "77.5"))
        .await
        .unwrap();

    assert_eq!(service.cached_entries().await, 2);
}

#[tokio::test]
async fn provider_failure_is_weather_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service(&server, 10);
    let result = service.get_weather(&RawCoordinates::new("1", "2")).await;
    assert!(result.is_err());
    assert_eq!(service.cached_entries().await, 0);
}

#[tokio::test]
async fn malformed_forecast_payload_propagates_as_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cod": "200"})))
        .mount(&server)
        .await;

    let service = service(&server, 10);
    let snapshot = service
        .get_weather(&RawCoordinates::new("1", "2"))
        .await
        .unwrap();
    assert!(snapshot.forecast.list.is_empty());
    assert_eq!(snapshot.temperature(), Some(28.5));
}

#[tokio::test]
async fn missing_api_key_fails_without_upstream_call() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would panic the mock server expectations.

    let service = WeatherService::new(String::new(), server.uri(), 10, 16);
    let result = service.get_weather(&RawCoordinates::new("1", "2")).await;
    assert!(result.is_err());
}
