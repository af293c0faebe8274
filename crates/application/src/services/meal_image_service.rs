//! Meal-image analysis

use std::{fmt, sync::Arc};

use base64::Engine as _;
use domain::{DomainError, MealItem};
use tracing::{info, instrument};

use crate::{error::ApplicationError, llm_json, ports::InferencePort, prompts};

const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Recognizes foods in a meal photo and estimates per-serving nutrition.
pub struct MealImageService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for MealImageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MealImageService").finish_non_exhaustive()
    }
}

impl MealImageService {
    /// Create a new service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Analyze one base64-encoded meal image.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unsupported mime type or an
    /// undecodable/empty payload, and propagates generation or parse
    /// failures.
    #[instrument(skip(self, image_base64), fields(mime_type))]
    pub async fn analyze(
        &self,
        mime_type: &str,
        image_base64: &str,
    ) -> Result<Vec<MealItem>, ApplicationError> {
        if !SUPPORTED_MIME_TYPES.contains(&mime_type) {
            return Err(DomainError::InvalidImage(format!(
                "unsupported mime type '{mime_type}', expected one of {SUPPORTED_MIME_TYPES:?}"
            ))
            .into());
        }

        let payload = base64::engine::general_purpose::STANDARD
            .decode(image_base64.trim())
            .map_err(|e| DomainError::InvalidImage(format!("payload is not valid base64: {e}")))?;
        if payload.is_empty() {
            return Err(DomainError::InvalidImage("payload is empty".to_string()).into());
        }

        let prompt = prompts::meal_image_analysis();
        let response = self
            .inference
            .generate_with_image(&prompt, mime_type, image_base64.trim())
            .await?;

        let items: Vec<MealItem> = llm_json::parse_llm_array(&response.content)?;
        info!(item_count = items.len(), "Meal image analyzed");
        Ok(items)
    }
}
