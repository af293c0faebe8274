//! Domain layer for BalanceLab
//!
//! Contains core business types for nutrition analysis and health-risk
//! prediction. This layer has no external dependencies and defines the
//! ubiquitous language.

pub mod errors;
pub mod health;
pub mod meal;
pub mod nutrition;

pub use errors::DomainError;
pub use health::{Gender, HealthProfile, RiskScores, FEATURE_COUNT};
pub use meal::MealItem;
pub use nutrition::{
    AnalysisResult, FoodNutrition, NutrientVector, ReferenceIntake, SuggestionResult,
};
