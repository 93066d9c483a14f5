pub mod open_meteo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ForecastData, ForecastRequest, GeocodeCandidate};
use service_core::error::AppError;

pub use open_meteo::OpenMeteo;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration(msg) => AppError::InternalError(anyhow::anyhow!(msg)),
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

/// Seam between the HTTP layer and the upstream weather/geocoding API.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Look up geocoding candidates for a place name, in provider order.
    async fn search_locations(
        &self,
        name: &str,
        count: Option<u32>,
    ) -> Result<Vec<GeocodeCandidate>, ProviderError>;

    /// Fetch the forecast document for the requested variables.
    async fn fetch_forecast(&self, request: &ForecastRequest)
        -> Result<ForecastData, ProviderError>;
}
