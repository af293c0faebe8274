//! Risk scoring adapter - Implements RiskScoringPort over the scoring client

use std::sync::Arc;

use application::{error::ApplicationError, ports::RiskScoringPort};
use async_trait::async_trait;
use domain::RiskScores;
use integration_scoring::{HttpScoringClient, ScoringClient, ScoringConfig, ScoringError};
use tracing::instrument;

/// Adapter exposing the external classifier service as a scoring port
pub struct HttpRiskScoringAdapter {
    client: Arc<dyn ScoringClient>,
}

impl std::fmt::Debug for HttpRiskScoringAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRiskScoringAdapter").finish_non_exhaustive()
    }
}

impl HttpRiskScoringAdapter {
    /// Create an adapter over an HTTP scoring client
    pub fn new(config: ScoringConfig) -> Result<Self, ApplicationError> {
        let client = HttpScoringClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create an adapter over any scoring client, for tests and wiring
    pub fn with_client(client: Arc<dyn ScoringClient>) -> Self {
        Self { client }
    }

    /// Convert scoring client error to application error
    fn map_error(e: ScoringError) -> ApplicationError {
        match e {
            ScoringError::InvalidFeatures { .. } => ApplicationError::Validation(e.to_string()),
            ScoringError::ParseError(msg) => ApplicationError::Parse(msg),
            ScoringError::ConnectionFailed(_)
            | ScoringError::RequestFailed(_)
            | ScoringError::ServiceUnavailable(_) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl RiskScoringPort for HttpRiskScoringAdapter {
    #[instrument(skip(self, features), fields(feature_count = features.len()))]
    async fn score(&self, features: &[f64]) -> Result<RiskScores, ApplicationError> {
        self.client.score(features).await.map_err(Self::map_error)
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}
