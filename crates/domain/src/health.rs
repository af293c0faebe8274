//! Health profile and risk-score types
//!
//! The classifier scoring service consumes a fixed-order numeric feature
//! vector; `HealthProfile::feature_vector` defines that order in one place.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Number of features in the scoring vector, including derived BMI
pub const FEATURE_COUNT: usize = 17;

/// Biological gender as encoded by the scoring service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Numeric encoding used in the feature vector
    const fn encoded(self) -> f64 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }
}

/// A member's health and lifestyle profile for risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in years
    pub age: f64,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Prior diabetes diagnosis (0 or 1)
    pub history_diabetes: u8,
    /// Prior hypertension diagnosis (0 or 1)
    pub history_hypertension: u8,
    /// Prior cardiovascular diagnosis (0 or 1)
    pub history_cardiovascular: u8,
    /// Cigarettes smoked per day
    pub smoke_daily: u32,
    /// Drinking sessions per week
    pub drink_weekly: u32,
    /// Exercise sessions per week
    pub exercise_weekly: u32,
    /// Average daily carbohydrate intake in grams
    pub daily_carbohydrate: f64,
    /// Average daily sugar intake in grams
    pub daily_sugar: f64,
    /// Average daily fat intake in grams
    pub daily_fat: f64,
    /// Average daily sodium intake in milligrams
    pub daily_sodium: f64,
    /// Average daily fiber intake in grams
    pub daily_fiber: f64,
    /// Average daily water intake in milliliters
    pub daily_water: f64,
}

impl HealthProfile {
    /// Body-mass index derived from height and weight
    ///
    /// # Errors
    ///
    /// Returns an error when height is not positive.
    pub fn bmi(&self) -> Result<f64, DomainError> {
        if self.height <= 0.0 {
            return Err(DomainError::invalid_profile("height", "must be positive"));
        }
        let meters = self.height / 100.0;
        Ok(self.weight / (meters * meters))
    }

    /// Fixed-order feature vector consumed by the scoring service.
    ///
    /// Order: age, gender, height, weight, three history flags,
    /// smoke/drink/exercise, six daily intakes, derived BMI.
    ///
    /// # Errors
    ///
    /// Returns an error when BMI cannot be derived.
    pub fn feature_vector(&self) -> Result<[f64; FEATURE_COUNT], DomainError> {
        let bmi = self.bmi()?;
        Ok([
            self.age,
            self.gender.encoded(),
            self.height,
            self.weight,
            f64::from(self.history_diabetes),
            f64::from(self.history_hypertension),
            f64::from(self.history_cardiovascular),
            f64::from(self.smoke_daily),
            f64::from(self.drink_weekly),
            f64::from(self.exercise_weekly),
            self.daily_carbohydrate,
            self.daily_sugar,
            self.daily_fat,
            self.daily_sodium,
            self.daily_fiber,
            self.daily_water,
            bmi,
        ])
    }
}

/// Independent probability scores for the three predicted conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    /// Probability of diabetes
    pub diabetes: f64,
    /// Probability of hypertension
    pub hypertension: f64,
    /// Probability of cardiovascular disease
    pub cardiovascular: f64,
}
