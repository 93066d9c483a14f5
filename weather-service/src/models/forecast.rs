use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coordinates and variable lists resolved from the query string, ready to
/// forward upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Vec<String>,
    pub hourly: Vec<String>,
}

/// The provider's forecast document. `current` holds one value per
/// requested variable plus its timestamp; `hourly` holds per-variable
/// sequences aligned with its `time` array. Unit tables, timezone and any
/// other provider fields ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastData {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
