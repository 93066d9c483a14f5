use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ProviderError, WeatherProvider};
use crate::config::ProviderConfig;
use crate::models::{ForecastData, ForecastRequest, GeocodeCandidate, GeocodeSearchResponse};
use crate::services::metrics::record_provider_call;

const MAX_ERROR_BODY_LEN: usize = 512;

/// Client for the Open-Meteo geocoding and forecast APIs. One instance is
/// shared by all in-flight requests; the configured timeout bounds every
/// upstream call.
pub struct OpenMeteo {
    config: ProviderConfig,
    http: Client,
}

impl OpenMeteo {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.geocoding_url.is_empty() || config.forecast_url.is_empty() {
            return Err(ProviderError::Configuration(
                "provider base URLs must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self.http.get(url).query(query).send().await.map_err(|e| {
            record_provider_call(operation, "connection_error");
            ProviderError::Connection(format!("Failed to reach {}: {}", url, e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            record_provider_call(operation, "read_error");
            ProviderError::Connection(format!("Failed to read response from {}: {}", url, e))
        })?;

        if !status.is_success() {
            record_provider_call(operation, "upstream_error");
            tracing::warn!(%status, operation, "Provider returned error status");
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        record_provider_call(operation, "ok");
        serde_json::from_str(&body).map_err(|e| {
            ProviderError::Decode(format!("Invalid JSON from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteo {
    async fn search_locations(
        &self,
        name: &str,
        count: Option<u32>,
    ) -> Result<Vec<GeocodeCandidate>, ProviderError> {
        let mut query: Vec<(&str, String)> = vec![
            ("name", name.to_string()),
            ("format", "json".to_string()),
        ];
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        let response: GeocodeSearchResponse = self
            .get_json("geocode", &self.config.geocoding_url, &query)
            .await?;

        Ok(response.results)
    }

    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastData, ProviderError> {
        let mut query: Vec<(&str, String)> = vec![
            ("latitude", request.latitude.to_string()),
            ("longitude", request.longitude.to_string()),
        ];
        if !request.current.is_empty() {
            query.push(("current", request.current.join(",")));
        }
        if !request.hourly.is_empty() {
            query.push(("hourly", request.hourly.join(",")));
        }

        self.get_json("forecast", &self.config.forecast_url, &query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= MAX_ERROR_BODY_LEN {
        return trimmed.to_string();
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
