//! Application layer - Use cases and orchestration
//!
//! Contains the diet-analysis pipeline, health-risk prediction and
//! meal-image analysis use cases, plus the port definitions their
//! infrastructure adapters implement.

pub mod error;
pub mod llm_json;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
