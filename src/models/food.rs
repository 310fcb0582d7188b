use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};

/// Meal slot a food entry is logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(TrackError::InvalidInput(format!(
                "unknown meal type '{other}' (expected breakfast, lunch, dinner or snack)"
            ))),
        }
    }
}

/// A logged food entry, persisted in the `foodLog` array.
///
/// `id` is stable across edits and never reassigned. `date` and `time` are
/// stamped once at insertion and left untouched by edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: u64,

    pub name: String,

    /// Kilocalories, strictly positive.
    pub calories: f64,

    /// Grams. Absent fields in stored data count as 0.
    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fats: f64,

    #[serde(rename = "mealType")]
    pub meal_type: MealType,

    /// ISO calendar day, `YYYY-MM-DD`.
    pub date: String,

    /// Local clock time at insertion, `HH:MM:SS`.
    pub time: String,
}

/// Editable fields of a food entry, as supplied by the caller.
///
/// Validated identically on add and update.
#[derive(Debug, Clone)]
pub struct NewFoodEntry {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal_type: MealType,
}

fn validate_grams(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackError::validation(field, "must be zero or more grams"));
    }
    Ok(())
}

impl NewFoodEntry {
    /// Field-level validation; a failure blocks the mutation without
    /// touching the store.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackError::validation("name", "must not be empty"));
        }
        if !self.calories.is_finite() || self.calories <= 0.0 {
            return Err(TrackError::validation(
                "calories",
                "must be greater than zero",
            ));
        }
        validate_grams("protein", self.protein)?;
        validate_grams("carbs", self.carbs)?;
        validate_grams("fats", self.fats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewFoodEntry {
        NewFoodEntry {
            name: "Oatmeal".to_string(),
            calories: 350.0,
            protein: 12.0,
            carbs: 60.0,
            fats: 6.0,
            meal_type: MealType::Breakfast,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut input = sample_input();
        input.name = "   ".to_string();
        match input.validate() {
            Err(TrackError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("expected name validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_nonpositive_calories_rejected() {
        let mut input = sample_input();
        input.calories = 0.0;
        assert!(input.validate().is_err());

        input.calories = -10.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_macros_rejected() {
        let mut input = sample_input();
        input.fats = -1.0;
        match input.validate() {
            Err(TrackError::Validation { field, .. }) => assert_eq!(field, "fats"),
            other => panic!("expected fats validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!("Breakfast".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_missing_macro_fields_default_to_zero() {
        let json = r#"{
            "id": 1,
            "name": "Black coffee",
            "calories": 5,
            "mealType": "breakfast",
            "date": "2026-08-06",
            "time": "07:15:00"
        }"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.protein, 0.0);
        assert_eq!(entry.carbs, 0.0);
        assert_eq!(entry.fats, 0.0);
    }
}
