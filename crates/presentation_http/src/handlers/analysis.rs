//! Diet analysis handlers

use axum::{Json, extract::State};
use domain::{AnalysisResult, MealItem};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Diet analysis request body
#[derive(Debug, Deserialize)]
pub struct DietRequest {
    /// Free-form meal description
    pub message: String,
}

/// Handle a diet analysis request
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn analyze_diet(
    State(state): State<AppState>,
    Json(request): Json<DietRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    let result = state.diet_service.analyze(&request.message).await?;
    Ok(Json(result))
}

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

/// Meal image analysis request body
#[derive(Debug, Deserialize)]
pub struct MealImageRequest {
    /// MIME type of the image (image/jpeg or image/png)
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub image_base64: String,
}

/// Meal image analysis response body
#[derive(Debug, Serialize)]
pub struct MealImageResponse {
    /// Recognized foods with estimated per-serving values
    pub foods: Vec<MealItem>,
}

/// Handle a meal image analysis request
#[instrument(skip(state, request), fields(mime_type = %request.mime_type))]
pub async fn analyze_meal_image(
    State(state): State<AppState>,
    Json(request): Json<MealImageRequest>,
) -> Result<Json<MealImageResponse>, ApiError> {
    let foods = state
        .meal_image_service
        .analyze(&request.mime_type, &request.image_base64)
        .await?;
    Ok(Json(MealImageResponse { foods }))
}
