//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the generation adapter, the scoring adapter and the
//! file-backed nutrition cache.

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::{GeminiInferenceAdapter, HttpRiskScoringAdapter};
pub use cache::{FileNutritionCache, generate_cache_key};
pub use config::{AppConfig, CacheConfig, Environment, ServerConfig};
