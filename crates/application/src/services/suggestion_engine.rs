//! Deficiency analysis and next-meal suggestions

use std::{fmt, sync::Arc};

use domain::{NutrientVector, SuggestionResult};
use serde::Deserialize;
use serde_json::Value;
use tracing::{instrument, warn};

use crate::{llm_json, ports::InferencePort, prompts};

/// Raw suggestion shape before normalization. `next_meal_suggestion`
/// arrives as whatever the model felt like emitting, so it stays a raw
/// [`Value`] until [`normalize_suggestion`] cleans it up.
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    deficient_nutrients: Vec<String>,
    #[serde(default)]
    next_meal_suggestion: Value,
}

/// Suggests foods covering nutrients that fall short of the reference
/// intake.
///
/// Soft-fails: any generation or parse error degrades to an empty
/// [`SuggestionResult`] rather than failing the caller. Suggestions are
/// advisory and never worth losing the nutrition breakdown over.
pub struct SuggestionEngine {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionEngine").finish_non_exhaustive()
    }
}

impl SuggestionEngine {
    /// Create a new engine
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Analyze the intake total and suggest a next meal.
    #[instrument(skip(self, total))]
    pub async fn suggest(&self, total: &NutrientVector) -> SuggestionResult {
        let prompt = prompts::meal_suggestion(total);
        let response = match self.inference.generate(&prompt).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "Suggestion call failed, continuing without suggestions");
                return SuggestionResult::default();
            },
        };

        let raw: RawSuggestion = match llm_json::parse_llm_object(&response.content) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "Suggestion response unparseable, continuing without suggestions");
                return SuggestionResult::default();
            },
        };

        let suggestions = normalize_suggestion(raw.next_meal_suggestion)
            .into_iter()
            .filter(|dish| !is_excluded_dish(dish))
            .collect();

        SuggestionResult {
            deficient_nutrients: raw.deficient_nutrients,
            next_meal_suggestion: suggestions,
        }
    }
}

/// Coerce the model's suggestion field into a flat string list.
///
/// A bare string becomes a one-element list, an array keeps its string
/// elements, everything else becomes empty.
fn normalize_suggestion(value: Value) -> Vec<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        },
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Dishes never surfaced as suggestions, regardless of what the model
/// returns.
fn is_excluded_dish(dish: &str) -> bool {
    let lowered = dish.to_lowercase();
    lowered.contains("salad") || lowered.contains("샐러드") || lowered.contains("뼈해장국")
}
