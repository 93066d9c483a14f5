use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::models::GeocodeCandidate;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GeocodeParams {
    pub location: String,
    #[validate(range(min = 1, max = 100, message = "count must be between 1 and 100"))]
    pub count: Option<u32>,
}

/// Look up geocoding candidates for a place name. Returns the provider's
/// candidate array verbatim; an empty array when nothing matched.
#[tracing::instrument(skip(state))]
pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<Vec<GeocodeCandidate>>, AppError> {
    params.validate()?;

    let name = params.location.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Location query 'location' is required"
        )));
    }

    let candidates = state.provider.search_locations(name, params.count).await?;

    tracing::info!(
        location = %name,
        results = candidates.len(),
        "Geocode lookup completed"
    );

    Ok(Json(candidates))
}
