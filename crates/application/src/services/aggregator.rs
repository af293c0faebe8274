//! Order-preserving aggregation of resolved nutrient vectors

use std::collections::HashMap;

use domain::{FoodNutrition, NutrientVector};

use crate::error::ApplicationError;

/// Re-expand the resolved map back onto the original food list and total
/// the vectors.
///
/// The per-food output mirrors `food_list` exactly: same order, same
/// duplicates. Duplicate foods therefore count toward the total once per
/// occurrence.
///
/// # Errors
///
/// A food missing from `resolved` is an internal bug (the resolver
/// guarantees coverage) and surfaces as [`ApplicationError::Internal`].
pub fn aggregate(
    food_list: &[String],
    resolved: &HashMap<String, NutrientVector>,
) -> Result<(Vec<FoodNutrition>, NutrientVector), ApplicationError> {
    let mut per_food = Vec::with_capacity(food_list.len());
    let mut total = NutrientVector::ZERO;

    for food in food_list {
        let vector = resolved.get(food).ok_or_else(|| {
            ApplicationError::Internal(format!("no resolved nutrition for '{food}'"))
        })?;
        total += *vector;
        per_food.push(FoodNutrition {
            food: food.clone(),
            nutrition: *vector,
        });
    }

    Ok((per_food, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(protein: f64, sodium: f64) -> NutrientVector {
        NutrientVector {
            protein,
            sodium,
            ..NutrientVector::ZERO
        }
    }

    #[test]
    fn preserves_input_order() {
        let foods = vec!["라면".to_string(), "김밥".to_string()];
        let mut resolved = HashMap::new();
        resolved.insert("김밥".to_string(), vector(10.0, 300.0));
        resolved.insert("라면".to_string(), vector(8.0, 900.0));

        let (per_food, _) = aggregate(&foods, &resolved).unwrap();
        assert_eq!(per_food[0].food, "라면");
        assert_eq!(per_food[1].food, "김밥");
    }

    #[test]
    fn duplicates_count_once_per_occurrence() {
        let foods = vec!["김밥".to_string(), "김밥".to_string()];
        let mut resolved = HashMap::new();
        resolved.insert("김밥".to_string(), vector(10.0, 300.0));

        let (per_food, total) = aggregate(&foods, &resolved).unwrap();
        assert_eq!(per_food.len(), 2);
        assert!((total.protein - 20.0).abs() < f64::EPSILON);
        assert!((total.sodium - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_list_totals_zero() {
        let (per_food, total) = aggregate(&[], &HashMap::new()).unwrap();
        assert!(per_food.is_empty());
        assert!(total.is_zero());
    }

    #[test]
    fn missing_key_is_an_internal_error() {
        let foods = vec!["김밥".to_string()];
        let result = aggregate(&foods, &HashMap::new());
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
