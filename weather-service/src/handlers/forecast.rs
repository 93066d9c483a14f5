use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::models::{ForecastData, ForecastRequest};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct ForecastParams {
    /// Place name to geocode; takes precedence over explicit coordinates.
    pub location: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
    pub current: Option<String>,
    pub hourly: Option<String>,
}

/// Forward a forecast request to the provider and return its document
/// verbatim. Coordinates come either from the query or from geocoding the
/// `location` parameter (top candidate).
#[tracing::instrument(skip(state))]
pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastData>, AppError> {
    params.validate()?;

    let current = parse_variables(params.current.as_deref(), "current")?;
    let hourly = parse_variables(params.hourly.as_deref(), "hourly")?;
    if current.is_empty() && hourly.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "At least one forecast variable must be requested via 'current' or 'hourly'"
        )));
    }

    let (latitude, longitude) = resolve_coordinates(&state, &params).await?;

    let request = ForecastRequest {
        latitude,
        longitude,
        current,
        hourly,
    };

    let data = state.provider.fetch_forecast(&request).await?;

    tracing::info!(
        latitude,
        longitude,
        current = request.current.len(),
        hourly = request.hourly.len(),
        "Forecast lookup completed"
    );

    Ok(Json(data))
}

/// Split a comma-separated variable list. A parameter that was provided
/// but names no variables is a client error; an absent parameter is an
/// empty list.
fn parse_variables(raw: Option<&str>, param: &str) -> Result<Vec<String>, AppError> {
    match raw {
        None => Ok(Vec::new()),
        Some(list) => {
            let variables: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();

            if variables.is_empty() {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "'{}' must name at least one forecast variable",
                    param
                )));
            }

            Ok(variables)
        }
    }
}

async fn resolve_coordinates(
    state: &AppState,
    params: &ForecastParams,
) -> Result<(f64, f64), AppError> {
    let location = params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    if let Some(name) = location {
        let candidates = state.provider.search_locations(name, Some(1)).await?;
        let top = candidates.into_iter().next().ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("No geocoding results for: {}", name))
        })?;

        tracing::debug!(
            location = %name,
            latitude = top.latitude,
            longitude = top.longitude,
            "Resolved location via geocoding"
        );

        return Ok((top.latitude, top.longitude));
    }

    match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Ok((latitude, longitude)),
        _ => Err(AppError::BadRequest(anyhow::anyhow!(
            "Provide either 'location' or both 'latitude' and 'longitude'"
        ))),
    }
}
