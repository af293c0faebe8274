//! Risk scoring port - Interface for the classifier scoring service

use async_trait::async_trait;
use domain::RiskScores;

use crate::error::ApplicationError;

/// Port for scoring a fixed-order feature vector against the pre-trained
/// condition classifiers
#[async_trait]
pub trait RiskScoringPort: Send + Sync {
    /// Score a feature vector, returning independent probabilities for the
    /// three conditions
    async fn score(&self, features: &[f64]) -> Result<RiskScores, ApplicationError>;

    /// Check if the scoring backend is healthy
    async fn is_healthy(&self) -> bool;
}
