use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};

/// Accepted age range in years.
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 120;

/// Accepted height range in centimeters.
pub const HEIGHT_CM_MIN: f64 = 50.0;
pub const HEIGHT_CM_MAX: f64 = 250.0;

/// Accepted weight range in kilograms.
pub const WEIGHT_KG_MIN: f64 = 10.0;
pub const WEIGHT_KG_MAX: f64 = 300.0;

/// Accepted meals-per-day range.
pub const MEALS_PER_DAY_MIN: u32 = 3;
pub const MEALS_PER_DAY_MAX: u32 = 6;

/// Biological sex used for physiological calculations only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// Activity level driving the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Extra,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to obtain TDEE.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extra => 1.90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::Extra => "Extra active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::Extra => "Very hard exercise or physical job",
        }
    }

    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Extra,
    ];
}

/// Weight goal, adjusting the calorie target by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Calorie adjustment applied on top of TDEE.
    pub fn calorie_offset(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 500.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain weight",
        }
    }

    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];
}

/// The user's health profile, persisted under the `userHealthData` key.
///
/// Mutated only through validated replacement; every derived metric refuses
/// to compute from an out-of-range profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHealthProfile {
    pub gender: Gender,

    /// Age in years.
    pub age: u32,

    #[serde(rename = "height")]
    pub height_cm: f64,

    #[serde(rename = "weight")]
    pub weight_kg: f64,

    #[serde(rename = "activityLevel")]
    pub activity_level: ActivityLevel,

    pub goal: Goal,

    #[serde(rename = "mealsPerDay")]
    pub meals_per_day: u32,

    /// Free-form tag, e.g. "vegetarian".
    #[serde(rename = "dietaryPreference", default)]
    pub dietary_preference: String,

    #[serde(default)]
    pub allergies: String,

    #[serde(rename = "healthConditions", default)]
    pub health_conditions: String,
}

pub fn validate_age(age: u32) -> Result<()> {
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(TrackError::validation(
            "age",
            format!("must be between {AGE_MIN} and {AGE_MAX} years"),
        ));
    }
    Ok(())
}

pub fn validate_height_cm(height_cm: f64) -> Result<()> {
    if !height_cm.is_finite() || !(HEIGHT_CM_MIN..=HEIGHT_CM_MAX).contains(&height_cm) {
        return Err(TrackError::validation(
            "height",
            format!("must be between {HEIGHT_CM_MIN} and {HEIGHT_CM_MAX} cm"),
        ));
    }
    Ok(())
}

pub fn validate_weight_kg(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || !(WEIGHT_KG_MIN..=WEIGHT_KG_MAX).contains(&weight_kg) {
        return Err(TrackError::validation(
            "weight",
            format!("must be between {WEIGHT_KG_MIN} and {WEIGHT_KG_MAX} kg"),
        ));
    }
    Ok(())
}

pub fn validate_meals_per_day(meals: u32) -> Result<()> {
    if !(MEALS_PER_DAY_MIN..=MEALS_PER_DAY_MAX).contains(&meals) {
        return Err(TrackError::validation(
            "mealsPerDay",
            format!("must be between {MEALS_PER_DAY_MIN} and {MEALS_PER_DAY_MAX}"),
        ));
    }
    Ok(())
}

impl UserHealthProfile {
    /// Check every field, reporting the first offending one by name.
    pub fn validate(&self) -> Result<()> {
        validate_age(self.age)?;
        validate_height_cm(self.height_cm)?;
        validate_weight_kg(self.weight_kg)?;
        validate_meals_per_day(self.meals_per_day)?;
        Ok(())
    }
}
