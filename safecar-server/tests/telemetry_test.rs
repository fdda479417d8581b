use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::mock_app::{MockApp, TEST_API_KEY, TEST_DEVICE_ID};

fn post_reading(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri("/api/v1/telemetry/readings")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .header("X-Device-Id", TEST_DEVICE_ID)
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn cabin_alert_payload() -> serde_json::Value {
    json!({
        "vehicle_id": 1,
        "driver_id": 1,
        "sensor_location": "CABIN",
        "cabin_temperature_celsius": 55.0,
        "cabin_humidity_percent": 68.0,
        "gas_type": "methane",
        "gas_concentration_ppm": 1250.0,
        "latitude": -12.0464,
        "longitude": -77.0428,
        "timestamp": "2025-11-13T10:30:00Z"
    })
}

#[tokio::test]
async fn test_record_cabin_reading_classifies_critical_gas_alert() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(cabin_alert_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["device_id"], json!(TEST_DEVICE_ID));
    assert_eq!(body["vehicle_id"], json!(1));
    assert_eq!(body["severity"], json!("CRITICAL"));
    assert_eq!(body["telemetry_type"], json!("CABIN_GAS_DETECTED"));
    assert_eq!(body["timestamp"], json!("2025-11-13T10:30:00Z"));
    // The mock backend is unroutable, so the sample never syncs.
    assert_eq!(body["backend_synced"], json!(false));
}

#[tokio::test]
async fn test_record_engine_reading_classifies_warning_anomaly() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(json!({
            "vehicle_id": 1,
            "driver_id": 1,
            "sensor_location": "ENGINE",
            "engine_temperature_celsius": 98.5,
            "current_amperes": 4.3
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["severity"], json!("WARNING"));
    assert_eq!(body["telemetry_type"], json!("TEMPERATURE_ANOMALY"));
}

#[tokio::test]
async fn test_record_reading_requires_auth_headers() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/v1/telemetry/readings")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(cabin_alert_payload().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_record_reading_rejects_wrong_api_key() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/v1/telemetry/readings")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .header("X-Device-Id", TEST_DEVICE_ID)
        .header("X-API-Key", "wrong-key-12345")
        .body(Body::from(cabin_alert_payload().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_record_reading_rejects_out_of_range_temperature() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(json!({
            "vehicle_id": 1,
            "driver_id": 1,
            "engine_temperature_celsius": 200.0
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("engine_temperature_celsius"));

    // Nothing was persisted for the rejected payload.
    let request = Request::builder()
        .uri("/api/v1/telemetry/readings/1")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_record_reading_rejects_empty_sensor_payload() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(json!({
            "vehicle_id": 1,
            "driver_id": 1
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("At least one sensor reading must be provided")
    );
}

#[tokio::test]
async fn test_record_reading_rejects_incomplete_coordinate_pair() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(json!({
            "vehicle_id": 1,
            "driver_id": 1,
            "latitude": -12.0464
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("latitude and longitude must be provided together")
    );
}

#[tokio::test]
async fn test_get_reading_by_id() {
    let app = MockApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_reading(cabin_alert_payload()))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let request = Request::builder()
        .uri(format!("/api/v1/telemetry/readings/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["sensor_location"], json!("CABIN"));
    assert_eq!(body["gas_type"], json!("methane"));
    assert_eq!(body["latitude"], json!(-12.0464));

    let request = Request::builder()
        .uri("/api/v1/telemetry/readings/999")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_vehicle_readings_with_limit() {
    let app = MockApp::new().await;

    for hour in ["08", "09", "10"] {
        let response = app
            .router
            .clone()
            .oneshot(post_reading(json!({
                "vehicle_id": 7,
                "driver_id": 1,
                "engine_temperature_celsius": 90.0,
                "timestamp": format!("2025-11-13T{hour}:00:00Z")
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .uri("/api/v1/telemetry/vehicles/7/readings?limit=2")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["vehicle_id"], json!(7));
    assert_eq!(body["count"], json!(2));
    // Newest first
    assert_eq!(body["data"][0]["timestamp"], json!("2025-11-13T10:00:00Z"));

    let request = Request::builder()
        .uri("/api/v1/telemetry/vehicles/7/readings?start=2025-11-13T08:30:00Z&end=2025-11-13T09:30:00Z")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["timestamp"], json!("2025-11-13T09:00:00Z"));
}

#[tokio::test]
async fn test_get_vehicle_readings_rejects_bad_time_range() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/v1/telemetry/vehicles/7/readings?start=yesterday")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_device_statistics() {
    let app = MockApp::new().await;

    for temperature in [90.0, 100.0] {
        let response = app
            .router
            .clone()
            .oneshot(post_reading(json!({
                "vehicle_id": 1,
                "driver_id": 1,
                "engine_temperature_celsius": temperature,
                "current_amperes": 2.0
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .uri("/api/v1/telemetry/stats")
        .header("X-Device-Id", TEST_DEVICE_ID)
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["device_id"], json!(TEST_DEVICE_ID));
    assert_eq!(body["total_readings"], json!(2));
    assert_eq!(body["engine_temperature_stats"]["min"], json!(90.0));
    assert_eq!(body["engine_temperature_stats"]["max"], json!(100.0));
    assert_eq!(body["engine_temperature_stats"]["avg"], json!(95.0));
    assert_eq!(body["engine_temperature_stats"]["count"], json!(2));
    assert!(body["gas_stats"].is_null());
    assert!(body["latest_reading"].is_object());
}
