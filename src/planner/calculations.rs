use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::models::{ActivityLevel, Gender, Goal, UserHealthProfile};
use crate::planner::constants::*;

/// BMI classification per the standard WHO boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body Mass Index: weight over squared height.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_MAX {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal metabolic rate via the revised Harris-Benedict equations.
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let age = age as f64;
    match gender {
        Gender::Male => {
            bmr_male::BASE + bmr_male::WEIGHT * weight_kg + bmr_male::HEIGHT * height_cm
                - bmr_male::AGE * age
        }
        Gender::Female => {
            bmr_female::BASE + bmr_female::WEIGHT * weight_kg + bmr_female::HEIGHT * height_cm
                - bmr_female::AGE * age
        }
    }
}

/// Total daily energy expenditure: BMR scaled by activity level.
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// TDEE adjusted by the fixed offset for the weight goal.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.calorie_offset()
}

/// The full derived health analysis for one profile.
///
/// Pure function of the profile; identical inputs always yield identical
/// outputs.
#[derive(Debug, Clone, Serialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub goal_calories: f64,
}

impl HealthMetrics {
    /// Compute all metrics for a profile.
    ///
    /// Refuses to compute anything when a field is out of range; the error
    /// names the offending field and no partial result is produced.
    pub fn for_profile(profile: &UserHealthProfile) -> Result<Self> {
        profile.validate()?;

        let bmi_value = bmi(profile.weight_kg, profile.height_cm);
        let bmr_value = bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);
        let tdee_value = tdee(bmr_value, profile.activity_level);

        Ok(Self {
            bmi: bmi_value,
            bmi_category: bmi_category(bmi_value),
            bmr: bmr_value,
            tdee: tdee_value,
            goal_calories: goal_calories(tdee_value, profile.goal),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;

    fn sample_profile() -> UserHealthProfile {
        UserHealthProfile {
            gender: Gender::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            meals_per_day: 3,
            dietary_preference: String::new(),
            allergies: String::new(),
            health_conditions: String::new(),
        }
    }

    #[test]
    fn test_bmi_reference_value() {
        // 70 kg at 175 cm: 70 / 1.75^2
        let value = bmi(70.0, 175.0);
        assert_float_absolute_eq!(value, 22.857, 0.001);
        assert_eq!(bmi_category(value), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.9), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_male_reference_value() {
        // 88.362 + 13.397*70 + 4.799*175 - 5.677*30
        let value = bmr(Gender::Male, 70.0, 175.0, 30);
        assert_float_absolute_eq!(value, 1695.667, 0.001);
    }

    #[test]
    fn test_bmr_female_reference_value() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        let value = bmr(Gender::Female, 60.0, 165.0, 25);
        assert_float_absolute_eq!(value, 1405.333, 0.001);
    }

    #[test]
    fn test_tdee_applies_multiplier() {
        let base = bmr(Gender::Male, 70.0, 175.0, 30);
        assert_float_absolute_eq!(tdee(base, ActivityLevel::Sedentary), base * 1.20, 1e-9);
        assert_float_absolute_eq!(tdee(base, ActivityLevel::Extra), base * 1.90, 1e-9);
    }

    #[test]
    fn test_goal_calorie_offsets() {
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Lose), 1500.0, 1e-9);
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Maintain), 2000.0, 1e-9);
        assert_float_absolute_eq!(goal_calories(2000.0, Goal::Gain), 2500.0, 1e-9);
    }

    #[test]
    fn test_metrics_are_deterministic() {
        let profile = sample_profile();
        let a = HealthMetrics::for_profile(&profile).unwrap();
        let b = HealthMetrics::for_profile(&profile).unwrap();
        assert_eq!(a.bmi, b.bmi);
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.tdee, b.tdee);
        assert_eq!(a.goal_calories, b.goal_calories);
    }

    #[test]
    fn test_invalid_profile_skips_calculation() {
        let mut profile = sample_profile();
        profile.weight_kg = 5.0;
        assert!(HealthMetrics::for_profile(&profile).is_err());
    }
}
