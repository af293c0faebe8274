//! Port definitions for the generation client
//!
//! Defines the trait (port) that generation backends must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// An image attached inline to a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineImage {
    /// MIME type of the image (image/jpeg or image/png)
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data_base64: String,
}

/// Request for text or vision generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text prompt
    pub prompt: String,
    /// Optional inline image for vision prompts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<InlineImage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a text-only request
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            model: None,
            temperature: None,
        }
    }

    /// Attach an inline image to the request
    pub fn with_image(mut self, mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        self.image = Some(InlineImage {
            mime_type: mime_type.into(),
            data_base64: data_base64.into(),
        });
        self
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature
    pub const fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated free text
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Port for generation backends
#[async_trait]
pub trait GenerationEngine: Send + Sync {
    /// Generate a complete response for a prompt (optionally with an image)
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;

    /// Check if the generation service is reachable
    async fn health_check(&self) -> Result<bool, GenerationError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}
