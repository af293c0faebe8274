//! Scoring service client

use async_trait::async_trait;
use domain::{FEATURE_COUNT, RiskScores};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Scoring client errors
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Connection to the scoring service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the scoring service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the scoring service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Feature vector has the wrong length
    #[error("Invalid feature vector: expected {expected} features, got {actual}")]
    InvalidFeatures { expected: usize, actual: usize },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Scoring service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Scoring service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8501".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for scoring feature vectors
#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Score a fixed-order feature vector against the three classifiers
    async fn score(&self, features: &[f64]) -> Result<RiskScores, ScoringError>;

    /// Check if the scoring service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Wire request for the scoring service
#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    features: &'a [f64],
}

/// Wire response from the scoring service
#[derive(Debug, Deserialize)]
struct ScoreResponse {
    diabetes: f64,
    hypertension: f64,
    cardiovascular: f64,
}

/// HTTP implementation of the scoring client
#[derive(Debug)]
pub struct HttpScoringClient {
    client: Client,
    config: ScoringConfig,
}

impl HttpScoringClient {
    /// Create a new scoring client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScoringError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ScoringError> {
        Self::new(ScoringConfig::default())
    }
}

#[async_trait]
impl ScoringClient for HttpScoringClient {
    #[instrument(skip(self, features), fields(feature_count = features.len()))]
    async fn score(&self, features: &[f64]) -> Result<RiskScores, ScoringError> {
        if features.len() != FEATURE_COUNT {
            return Err(ScoringError::InvalidFeatures {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }

        let url = format!("{}/score", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "Scoring feature vector");

        let response = self
            .client
            .post(&url)
            .json(&ScoreRequest { features })
            .send()
            .await
            .map_err(|e| ScoringError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ScoringError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ScoringError::RequestFailed(format!("HTTP {status}")));
        }

        let scores: ScoreResponse = response
            .json()
            .await
            .map_err(|e| ScoringError::ParseError(e.to_string()))?;

        Ok(RiskScores {
            diabetes: scores.diabetes,
            hypertension: scores.hypertension,
            cardiovascular: scores.cardiovascular,
        })
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.config.base_url.trim_end_matches('/'));
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
