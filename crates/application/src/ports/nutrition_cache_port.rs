//! Nutrition cache port
//!
//! The cache maps a content-addressed key derived from a normalized food
//! name to its nutrient vector. It is the only cross-request state in the
//! system: constructed once at process start and passed to the resolver by
//! handle, never reached through globals.
//!
//! Concurrency note: the port does not serialize a whole
//! read-batch-then-write span. Two requests resolving overlapping foods may
//! both miss and both write; last write wins, which only costs a duplicate
//! external call — entries for the same key converge to near-identical
//! values.

use domain::NutrientVector;

/// Port for the persistent food-nutrition cache
pub trait NutritionCachePort: Send + Sync + std::fmt::Debug {
    /// Derive the stable content-addressed key for a food name.
    ///
    /// Same food name string, same key — across processes and restarts.
    fn key_for(&self, food: &str) -> String;

    /// Get a cached nutrient vector by key
    fn get(&self, key: &str) -> Option<NutrientVector>;

    /// Insert one entry and persist
    fn put(&self, key: &str, vector: NutrientVector);

    /// Insert a batch of entries and persist once.
    ///
    /// Persistence failures are logged and swallowed by implementations; a
    /// write never blocks the response.
    fn put_many(&self, entries: &[(String, NutrientVector)]);

    /// Number of entries currently cached
    fn len(&self) -> usize;

    /// True when the cache has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
