use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;

/// Liveness probe. The service holds no state; answering is the check.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "weather-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness probe. Ready as soon as the listener is bound.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
