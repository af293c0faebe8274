//! Health risk prediction over the external scoring service

use std::{fmt, sync::Arc};

use domain::{HealthProfile, RiskScores};
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::RiskScoringPort};

/// Scores a health profile against the three-disease classifier.
///
/// Profile validation (and the derived BMI) happens in the domain; this
/// service only bridges to the scoring port.
pub struct HealthPredictionService {
    scoring: Arc<dyn RiskScoringPort>,
}

impl fmt::Debug for HealthPredictionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthPredictionService").finish_non_exhaustive()
    }
}

impl HealthPredictionService {
    /// Create a new prediction service
    pub fn new(scoring: Arc<dyn RiskScoringPort>) -> Self {
        Self { scoring }
    }

    /// Predict disease-risk probabilities for one profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unusable profile (non-positive
    /// height) or an external-service error when scoring fails.
    #[instrument(skip(self, profile))]
    pub async fn predict(&self, profile: &HealthProfile) -> Result<RiskScores, ApplicationError> {
        let features = profile.feature_vector()?;
        let scores = self.scoring.score(&features).await?;
        info!(
            diabetes = scores.diabetes,
            hypertension = scores.hypertension,
            cardiovascular = scores.cardiovascular,
            "Risk scores computed"
        );
        Ok(scores)
    }
}
