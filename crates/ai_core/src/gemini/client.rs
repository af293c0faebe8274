//! Gemini REST client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{GenerationEngine, GenerationRequest, GenerationResponse};

/// Generation engine backed by the Gemini `generateContent` REST API
pub struct GeminiGenerationEngine {
    client: Client,
    config: GenerationConfig,
}

impl std::fmt::Debug for GeminiGenerationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerationEngine")
            .field("base_url", &self.config.base_url)
            .field("default_model", &self.config.default_model)
            .finish_non_exhaustive()
    }
}

impl GeminiGenerationEngine {
    /// Create a new engine from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        if config.api_key.is_none() {
            return Err(GenerationError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Gemini generation engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a model call
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.config
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .ok_or(GenerationError::MissingApiKey)
    }
}

/// Gemini-format generation request
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationOptions>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inline_data")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Serialize)]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Gemini-format generation response
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GenerationEngine for GeminiGenerationEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request), has_image = request.image.is_some()))]
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let model = self.resolve_model(&request).to_string();
        let api_key = self.api_key()?.to_string();

        let mut parts = vec![GeminiPart::Text {
            text: request.prompt.clone(),
        }];
        if let Some(image) = &request.image {
            parts.push(GeminiPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data_base64.clone(),
                },
            });
        }

        let body = GeminiRequest {
            contents: vec![GeminiContent { parts }],
            generation_config: Some(GeminiGenerationOptions {
                temperature: request.temperature.or(Some(self.config.temperature)),
            }),
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout_ms)
                } else {
                    GenerationError::from(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generation request failed");
            return Err(GenerationError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content: String = gemini_response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| {
                GenerationError::InvalidResponse("response contained no candidates".to_string())
            })?;

        debug!(content_len = content.len(), "Generation completed");

        Ok(GenerationResponse { content, model })
    }

    async fn health_check(&self) -> Result<bool, GenerationError> {
        let api_key = self.api_key()?.to_string();
        let url = format!(
            "{}/v1beta/models",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(url)
            .header("x-goog-api-key", api_key)
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
