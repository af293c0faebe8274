//! Application state shared across handlers

use std::sync::Arc;

use application::{
    DietAnalysisService, HealthPredictionService, MealImageService,
    ports::{InferencePort, RiskScoringPort},
};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Diet analysis pipeline
    pub diet_service: Arc<DietAnalysisService>,
    /// Health risk prediction
    pub prediction_service: Arc<HealthPredictionService>,
    /// Meal image analysis
    pub meal_image_service: Arc<MealImageService>,
    /// Generation backend, for readiness reporting
    pub inference: Arc<dyn InferencePort>,
    /// Scoring backend, for readiness reporting
    pub scoring: Arc<dyn RiskScoringPort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
