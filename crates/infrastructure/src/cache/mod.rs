//! Cache implementations and key derivation

mod file_cache;

pub use file_cache::FileNutritionCache;

/// Generate a collision-resistant cache key from components
///
/// Uses BLAKE3 hashing for stable, content-addressed keys.
#[must_use]
pub fn generate_cache_key(prefix: &str, components: &[&str]) -> String {
    let mut hasher = blake3::Hasher::new();
    for component in components {
        hasher.update(component.as_bytes());
        hasher.update(b"|"); // Separator to avoid collisions
    }
    let hash = hasher.finalize();
    format!("{}:{}", prefix, hash.to_hex())
}
