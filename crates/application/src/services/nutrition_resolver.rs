//! Nutrition resolver - cache-aware batched nutrition lookup

use std::{collections::HashMap, fmt, sync::Arc};

use domain::{FoodNutrition, NutrientVector};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    llm_json,
    ports::{InferencePort, NutritionCachePort},
    prompts,
};

/// Batch shape returned by the nutrition prompt
#[derive(Debug, Deserialize)]
struct NutritionBatch {
    #[serde(default)]
    nutrition_per_food: Vec<FoodNutrition>,
}

/// Resolves a food-name list to nutrient vectors, splitting cache hits
/// from misses and issuing exactly one batched generation call for the
/// misses.
///
/// Fail-fast: if the batched call or its parse fails, the whole resolution
/// fails. Partial nutrient data is worse than none — totals would silently
/// under-count.
pub struct NutritionResolver {
    inference: Arc<dyn InferencePort>,
    cache: Arc<dyn NutritionCachePort>,
}

impl fmt::Debug for NutritionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl NutritionResolver {
    /// Create a new resolver
    pub fn new(inference: Arc<dyn InferencePort>, cache: Arc<dyn NutritionCachePort>) -> Self {
        Self { inference, cache }
    }

    /// Resolve every food name to a nutrient vector.
    ///
    /// The returned map covers both cache hits and freshly resolved
    /// entries. Freshly resolved entries are written back to the cache in
    /// one batched persist.
    ///
    /// # Errors
    ///
    /// Returns an error when the batched call fails, the response cannot
    /// be parsed, or the response does not cover every requested food.
    #[instrument(skip(self, food_list), fields(food_count = food_list.len()))]
    pub async fn resolve(
        &self,
        food_list: &[String],
    ) -> Result<HashMap<String, NutrientVector>, ApplicationError> {
        let mut resolved: HashMap<String, NutrientVector> = HashMap::new();
        let mut misses: Vec<String> = Vec::new();

        // Unique names in first-seen order; duplicates collapse here and
        // are re-expanded by the aggregator.
        for food in food_list {
            if resolved.contains_key(food) || misses.contains(food) {
                continue;
            }
            let key = self.cache.key_for(food);
            match self.cache.get(&key) {
                Some(vector) => {
                    debug!(food = %food, "Cache hit");
                    resolved.insert(food.clone(), vector);
                },
                None => misses.push(food.clone()),
            }
        }

        if misses.is_empty() {
            debug!("All foods served from cache, no external call");
            return Ok(resolved);
        }

        debug!(miss_count = misses.len(), "Resolving cache misses in one batch");
        let prompt = prompts::nutrition_batch(&misses);
        let response = self.inference.generate(&prompt).await?;
        let batch: NutritionBatch = llm_json::parse_llm_object(&response.content)?;

        let mut fresh: Vec<(String, NutrientVector)> = Vec::with_capacity(batch.nutrition_per_food.len());
        for entry in batch.nutrition_per_food {
            fresh.push((self.cache.key_for(&entry.food), entry.nutrition));
            resolved.insert(entry.food, entry.nutrition);
        }

        // Every requested miss must be covered; serving partial totals
        // silently under-counts.
        let uncovered: Vec<&String> = misses.iter().filter(|f| !resolved.contains_key(*f)).collect();
        if !uncovered.is_empty() {
            warn!(missing = ?uncovered, "Batch response did not cover every requested food");
            return Err(ApplicationError::Parse(format!(
                "batch response missing foods: {uncovered:?}"
            )));
        }

        self.cache.put_many(&fresh);
        Ok(resolved)
    }
}
