//! Health risk prediction handler

use axum::{Json, extract::State};
use domain::{HealthProfile, RiskScores};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Handle a health risk prediction request
#[instrument(skip(state, profile))]
pub async fn predict_health(
    State(state): State<AppState>,
    Json(profile): Json<HealthProfile>,
) -> Result<Json<RiskScores>, ApiError> {
    let scores = state.prediction_service.predict(&profile).await?;
    Ok(Json(scores))
}
