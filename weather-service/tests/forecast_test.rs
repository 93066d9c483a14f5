mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_payload() -> Value {
    json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "generationtime_ms": 0.2,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "elevation": 23.0,
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C"
        },
        "current": {
            "time": "2026-08-04T12:15",
            "interval": 900,
            "temperature_2m": 18.4
        },
        "hourly_units": { "time": "iso8601", "temperature_2m": "°C" },
        "hourly": {
            "time": ["2026-08-04T00:00", "2026-08-04T01:00", "2026-08-04T02:00"],
            "temperature_2m": [15.2, 14.8, 14.6]
        }
    })
}

// =============================================================================
// Success paths
// =============================================================================

#[tokio::test]
async fn forecast_returns_requested_variables() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.509865"))
        .and(query_param("longitude", "-0.118092"))
        .and(query_param("current", "temperature_2m"))
        .and(query_param("hourly", "temperature_2m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .expect(1)
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.509865&longitude=-0.118092&current=temperature_2m&hourly=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");

    // A single value under `current`, a time-aligned sequence under `hourly`
    assert!(body["current"]["temperature_2m"].is_number());
    let times = body["hourly"]["time"].as_array().expect("hourly time axis");
    let values = body["hourly"]["temperature_2m"]
        .as_array()
        .expect("hourly temperature sequence");
    assert_eq!(times.len(), values.len());

    // Unmodeled provider fields pass through untouched
    assert_eq!(body["timezone"], "GMT");
    assert_eq!(body["current_units"]["temperature_2m"], "°C");
}

#[tokio::test]
async fn forecast_accepts_a_single_scope() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("hourly", "temperature_2m,wind_speed_10m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&longitude=-0.12&hourly=temperature_2m,wind_speed_10m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn forecast_geocodes_a_location_name() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Berlin"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "name": "Berlin",
                    "latitude": 52.52,
                    "longitude": 13.405,
                    "country": "Germany",
                    "admin1": "Berlin"
                }
            ]
        })))
        .expect(1)
        .mount(&provider)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.52"))
        .and(query_param("longitude", "13.405"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .expect(1)
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?location=Berlin&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn forecast_unknown_location_is_not_found() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "generationtime_ms": 0.1 })),
        )
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?location=Atlantis&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

// =============================================================================
// Validation failures (no provider call)
// =============================================================================

#[tokio::test]
async fn forecast_out_of_range_latitude_is_rejected_without_a_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .expect(0)
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=999&longitude=0&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn forecast_out_of_range_longitude_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=0&longitude=-200&hourly=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn forecast_without_variables_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&longitude=-0.12",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn forecast_with_an_empty_variable_list_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&longitude=-0.12&current=",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn forecast_with_missing_coordinates_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

// =============================================================================
// Upstream failures
// =============================================================================

#[tokio::test]
async fn forecast_provider_error_status_is_a_bad_gateway() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&provider)
        .await;

    let app = TestApp::spawn_with_provider(&provider.uri()).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&longitude=-0.12&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn forecast_unreachable_provider_is_a_bad_gateway() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/forecast?latitude=51.5&longitude=-0.12&current=temperature_2m",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 502);
}
