//! Inference port - Interface for text/vision generation

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of a generation call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated free text
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for generation operations
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response for a text prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Generate a response for a prompt with an attached image
    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image_base64: &str,
    ) -> Result<InferenceResult, ApplicationError>;

    /// Check if the generation backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current model
    fn current_model(&self) -> String;
}
