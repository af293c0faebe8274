//! Diet analysis orchestration

use std::{fmt, sync::Arc};

use domain::AnalysisResult;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, NutritionCachePort},
    services::{aggregate, FoodExtractor, NutritionResolver, SuggestionEngine},
};

/// End-to-end diet analysis: extraction, resolution, aggregation,
/// suggestion.
///
/// Stage failure handling is deliberately asymmetric. Extraction and
/// resolution failures degrade to empty / foods-only results because
/// nothing downstream is trustworthy without them. Suggestion failures
/// are absorbed; the nutrition breakdown stands on its own.
pub struct DietAnalysisService {
    extractor: FoodExtractor,
    resolver: NutritionResolver,
    suggestions: SuggestionEngine,
}

impl fmt::Debug for DietAnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DietAnalysisService").finish_non_exhaustive()
    }
}

impl DietAnalysisService {
    /// Wire up the pipeline over one inference port and one cache
    pub fn new(inference: Arc<dyn InferencePort>, cache: Arc<dyn NutritionCachePort>) -> Self {
        Self {
            extractor: FoodExtractor::new(Arc::clone(&inference)),
            resolver: NutritionResolver::new(Arc::clone(&inference), cache),
            suggestions: SuggestionEngine::new(inference),
        }
    }

    /// Analyze one free-form meal description.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations surface as errors; external
    /// failures degrade to partial results instead.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn analyze(&self, message: &str) -> Result<AnalysisResult, ApplicationError> {
        if message.trim().is_empty() {
            return Ok(AnalysisResult::empty());
        }

        let food_list = self.extractor.extract(message).await;
        if food_list.is_empty() {
            info!("No foods recognized in message");
            return Ok(AnalysisResult::empty());
        }

        let resolved = match self.resolver.resolve(&food_list).await {
            Ok(resolved) => resolved,
            Err(error) => {
                warn!(%error, "Nutrition resolution failed, returning foods only");
                return Ok(AnalysisResult::foods_only(food_list));
            },
        };

        let (nutrition_per_food, total_nutrition) = aggregate(&food_list, &resolved)?;
        let suggestion = self.suggestions.suggest(&total_nutrition).await;

        Ok(AnalysisResult {
            food_list,
            nutrition_per_food,
            total_nutrition,
            deficient_nutrients: suggestion.deficient_nutrients,
            next_meal_suggestion: suggestion.next_meal_suggestion,
        })
    }
}
