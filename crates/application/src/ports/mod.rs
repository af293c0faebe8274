//! Port definitions
//!
//! Traits implemented by infrastructure adapters and injected into the
//! application services.

pub mod inference_port;
pub mod nutrition_cache_port;
pub mod scoring_port;

pub use inference_port::{InferencePort, InferenceResult};
pub use nutrition_cache_port::NutritionCachePort;
pub use scoring_port::RiskScoringPort;
