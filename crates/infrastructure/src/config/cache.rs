//! Nutrition cache configuration.

use serde::Deserialize;

/// Nutrition cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Path of the cache file
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "nutrition_cache.json".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
