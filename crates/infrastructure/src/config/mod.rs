//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `cache`: nutrition cache file location
//!
//! Generation and scoring settings reuse the config types of their own
//! crates so every knob lives next to the client it drives.

mod cache;
mod server;

use std::fmt;

use ai_core::GenerationConfig;
use application::error::ApplicationError;
use integration_scoring::ScoringConfig;
use serde::Deserialize;

pub use cache::CacheConfig;
pub use server::ServerConfig;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed validation
    #[default]
    Development,
    /// Production environment - strict validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation service configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Classifier scoring service configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Nutrition cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., BALANCELAB_SERVER__PORT).
            // Double underscore separates nesting levels so snake_case leaves
            // like generation.api_key stay addressable.
            .add_source(
                config::Environment::with_prefix("BALANCELAB")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate configuration before serving traffic.
    ///
    /// # Errors
    ///
    /// Returns an error when the generation API key is missing; handlers
    /// would fail every request without it, so startup fails instead.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.generation.api_key.is_none() {
            return Err(ApplicationError::Configuration(
                "generation.api_key is not set (BALANCELAB_GENERATION__API_KEY)".to_string(),
            ));
        }
        Ok(())
    }
}
