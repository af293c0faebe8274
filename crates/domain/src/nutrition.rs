//! Nutrition value objects
//!
//! The seven-field nutrient vector is the unit of every nutrition
//! computation: per-food lookups, cached entries, and per-request totals all
//! share this shape.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed seven-field nutrition record.
///
/// All seven fields are always present. Upstream sources routinely omit
/// fields or return them as strings, so deserialization is lenient: numbers
/// are taken as-is, numeric strings are parsed, everything else becomes 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientVector {
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,
    /// Carbohydrate in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbohydrate: f64,
    /// Water in milliliters
    #[serde(default, deserialize_with = "lenient_f64")]
    pub water: f64,
    /// Sugar in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,
    /// Dietary fiber in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,
    /// Sodium in milligrams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: f64,
}

/// Coerce a loosely-typed JSON value into f64, defaulting to 0.0
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

impl NutrientVector {
    /// All-zero vector, the starting point of every aggregation
    pub const ZERO: Self = Self {
        protein: 0.0,
        carbohydrate: 0.0,
        water: 0.0,
        sugar: 0.0,
        fat: 0.0,
        fiber: 0.0,
        sodium: 0.0,
    };

    /// True if every field is exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Element-wise sum over an iterator of vectors
    pub fn sum<'a>(vectors: impl IntoIterator<Item = &'a Self>) -> Self {
        vectors.into_iter().fold(Self::ZERO, |acc, v| acc + *v)
    }
}

impl Add for NutrientVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein: self.protein + rhs.protein,
            carbohydrate: self.carbohydrate + rhs.carbohydrate,
            water: self.water + rhs.water,
            sugar: self.sugar + rhs.sugar,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
            sodium: self.sodium + rhs.sodium,
        }
    }
}

impl AddAssign for NutrientVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Reference per-meal intake for a balanced adult diet.
///
/// Deficiency judgments compare a request's total nutrition against these
/// thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceIntake;

impl ReferenceIntake {
    /// Protein threshold in grams
    pub const PROTEIN_G: f64 = 25.0;
    /// Carbohydrate threshold in grams
    pub const CARBOHYDRATE_G: f64 = 100.0;
    /// Water threshold in milliliters
    pub const WATER_ML: f64 = 500.0;
    /// Sugar threshold in grams
    pub const SUGAR_G: f64 = 15.0;
    /// Fat threshold in grams
    pub const FAT_G: f64 = 25.0;
    /// Fiber threshold in grams
    pub const FIBER_G: f64 = 10.0;
    /// Sodium threshold in milligrams
    pub const SODIUM_MG: f64 = 650.0;
}

/// A food name paired with its nutrient vector.
///
/// One entry per position of the input food list; duplicate food names
/// repeat the same vector ("I ate two servings" semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrition {
    /// Coarse food-category name (e.g. "김밥")
    pub food: String,
    /// Nutrient vector for one serving
    #[serde(default)]
    pub nutrition: NutrientVector,
}

impl FoodNutrition {
    /// Create a new entry
    pub fn new(food: impl Into<String>, nutrition: NutrientVector) -> Self {
        Self {
            food: food.into(),
            nutrition,
        }
    }
}

/// Deficiency list plus an optional next-meal suggestion.
///
/// `next_meal_suggestion` holds zero or one dish names after boundary
/// normalization; it is always a list on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Nutrient labels below their reference threshold
    #[serde(default)]
    pub deficient_nutrients: Vec<String>,
    /// Zero or one recommended dishes for the next meal
    #[serde(default)]
    pub next_meal_suggestion: Vec<String>,
}

/// Full diet-analysis response for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Extracted food names in model order, duplicates kept
    pub food_list: Vec<String>,
    /// Per-food nutrition in input order
    pub nutrition_per_food: Vec<FoodNutrition>,
    /// Element-wise sum over `nutrition_per_food`
    pub total_nutrition: NutrientVector,
    /// Nutrients below their reference threshold
    pub deficient_nutrients: Vec<String>,
    /// Zero or one recommended dishes
    pub next_meal_suggestion: Vec<String>,
}

impl AnalysisResult {
    /// All-empty result, returned when no food was found in the input
    #[must_use]
    pub fn empty() -> Self {
        Self {
            food_list: Vec::new(),
            nutrition_per_food: Vec::new(),
            total_nutrition: NutrientVector::ZERO,
            deficient_nutrients: Vec::new(),
            next_meal_suggestion: Vec::new(),
        }
    }

    /// Result carrying only the extracted food list.
    ///
    /// Shape returned when batched resolution fails: the caller knows what
    /// was said but nothing could be priced.
    #[must_use]
    pub fn foods_only(food_list: Vec<String>) -> Self {
        Self {
            food_list,
            ..Self::empty()
        }
    }
}
