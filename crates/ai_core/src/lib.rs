//! AI Core - Text and vision generation client
//!
//! Provides abstractions for remote LLM generation. Uses the Gemini
//! `generateContent` REST API as the concrete backend.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use gemini::GeminiGenerationEngine;
pub use ports::{GenerationEngine, GenerationRequest, GenerationResponse, InlineImage};
