//! Port adapters

mod generation_adapter;
mod scoring_adapter;

pub use generation_adapter::GeminiInferenceAdapter;
pub use scoring_adapter::HttpRiskScoringAdapter;
