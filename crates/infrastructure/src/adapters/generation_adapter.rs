//! Gemini generation adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{GeminiGenerationEngine, GenerationConfig, GenerationEngine, GenerationRequest};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the Gemini generation backend
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiGenerationEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: GenerationConfig) -> Result<Self, ApplicationError> {
        let engine = GeminiGenerationEngine::new(config)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::GenerationError) -> ApplicationError {
        match e {
            ai_core::GenerationError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Generation connection failed: {msg}"))
            },
            ai_core::GenerationError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Generation timeout after {ms}ms"))
            },
            ai_core::GenerationError::RateLimited | ai_core::GenerationError::ServerError(_) => {
                ApplicationError::ExternalService(e.to_string())
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }

    async fn run(&self, request: GenerationRequest) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();
        let response = self.engine.generate(request).await.map_err(Self::map_error)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            latency_ms = latency_ms,
            "Generation completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            latency_ms,
        })
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        self.run(GenerationRequest::text(prompt)).await
    }

    #[instrument(skip(self, prompt, image_base64), fields(mime_type))]
    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image_base64: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        self.run(GenerationRequest::text(prompt).with_image(mime_type, image_base64))
            .await
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
