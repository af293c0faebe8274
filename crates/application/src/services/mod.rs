//! Application services

pub mod aggregator;
pub mod diet_analysis_service;
pub mod food_extractor;
pub mod health_prediction_service;
pub mod meal_image_service;
pub mod nutrition_resolver;
pub mod suggestion_engine;

pub use aggregator::aggregate;
pub use diet_analysis_service::DietAnalysisService;
pub use food_extractor::FoodExtractor;
pub use health_prediction_service::HealthPredictionService;
pub use meal_image_service::MealImageService;
pub use nutrition_resolver::NutritionResolver;
pub use suggestion_engine::SuggestionEngine;
