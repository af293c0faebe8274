//! Meal-image analysis types

use serde::{Deserialize, Serialize};

use crate::nutrition::NutrientVector;

/// One recognized food in a meal image, with estimated per-serving values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Recognized food name
    pub food_name: String,
    /// Estimated calories in kcal
    #[serde(default)]
    pub calories: f64,
    /// Estimated nutrient vector for one serving
    #[serde(default)]
    pub nutrients: NutrientVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_item_deserializes_with_nutrients() {
        let json = r#"{
            "food_name": "비빔밥",
            "calories": 560,
            "nutrients": {"protein": 18.0, "carbohydrate": 85.0}
        }"#;
        let item: MealItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.food_name, "비빔밥");
        assert!((item.calories - 560.0).abs() < f64::EPSILON);
        assert!((item.nutrients.protein - 18.0).abs() < f64::EPSILON);
        assert!(item.nutrients.water.abs() < f64::EPSILON);
    }

    #[test]
    fn meal_item_missing_optionals_default() {
        let json = r#"{"food_name": "된장찌개"}"#;
        let item: MealItem = serde_json::from_str(json).unwrap();
        assert!(item.calories.abs() < f64::EPSILON);
        assert!(item.nutrients.is_zero());
    }
}
