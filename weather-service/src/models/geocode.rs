use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope of the geocoding search API. The provider omits `results`
/// entirely when nothing matched, so it defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeSearchResponse {
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

/// One geocoding match, in provider order. Fields the service does not
/// model (`country_code`, `population`, timezone, ...) are collected in
/// `extra` so the candidate serializes back with everything the provider
/// sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
