use serde::Serialize;

use crate::planner::constants::*;

/// Daily macro-nutrient targets derived from the goal-calorie figure.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietPlan {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

impl DietPlan {
    /// Split the calorie target 30/40/30 across protein, carbs and fat and
    /// convert each share to grams.
    pub fn for_calories(goal_calories: f64) -> Self {
        // A lose-goal on an extreme low-end profile can push the target
        // below zero; treat that as an empty plan.
        let calories = goal_calories.max(0.0);
        Self {
            calories: calories.round() as u32,
            protein_g: (calories * PROTEIN_ENERGY_SHARE / KCAL_PER_GRAM_PROTEIN).round() as u32,
            carbs_g: (calories * CARBS_ENERGY_SHARE / KCAL_PER_GRAM_CARBS).round() as u32,
            fats_g: (calories * FAT_ENERGY_SHARE / KCAL_PER_GRAM_FAT).round() as u32,
        }
    }
}

/// A daily plan subdivided across the configured number of meals.
///
/// Each field is rounded independently; the per-meal values times the meal
/// count may drift from the daily total by rounding error. Accepted, not
/// corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub meals_per_day: u32,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

impl MealPlan {
    pub fn for_diet(diet: &DietPlan, meals_per_day: u32) -> Self {
        let meals = meals_per_day.max(1) as f64;
        Self {
            meals_per_day: meals_per_day.max(1),
            calories: (diet.calories as f64 / meals).round() as u32,
            protein_g: (diet.protein_g as f64 / meals).round() as u32,
            carbs_g: (diet.carbs_g as f64 / meals).round() as u32,
            fats_g: (diet.fats_g as f64 / meals).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_split_reconstructs_energy() {
        for calories in [1200.0, 1535.0, 2000.0, 2500.0, 3400.0] {
            let plan = DietPlan::for_calories(calories);
            let energy = plan.protein_g as f64 * KCAL_PER_GRAM_PROTEIN
                + plan.carbs_g as f64 * KCAL_PER_GRAM_CARBS
                + plan.fats_g as f64 * KCAL_PER_GRAM_FAT;
            // Rounding grams loses at most a few kcal.
            assert!(
                (energy - calories).abs() < 7.0,
                "split of {calories} kcal reconstructed as {energy}"
            );
        }
    }

    #[test]
    fn test_known_split() {
        let plan = DietPlan::for_calories(2000.0);
        assert_eq!(plan.calories, 2000);
        assert_eq!(plan.protein_g, 150); // 2000 * 0.30 / 4
        assert_eq!(plan.carbs_g, 200); // 2000 * 0.40 / 4
        assert_eq!(plan.fats_g, 67); // 2000 * 0.30 / 9
    }

    #[test]
    fn test_negative_target_gives_empty_plan() {
        let plan = DietPlan::for_calories(-250.0);
        assert_eq!(plan.calories, 0);
        assert_eq!(plan.protein_g, 0);
    }

    #[test]
    fn test_meal_plan_rounds_per_field() {
        let diet = DietPlan::for_calories(2000.0);
        let meals = MealPlan::for_diet(&diet, 3);
        assert_eq!(meals.calories, 667); // 2000 / 3
        assert_eq!(meals.protein_g, 50); // 150 / 3
        assert_eq!(meals.carbs_g, 67); // 200 / 3
        assert_eq!(meals.fats_g, 22); // 67 / 3
    }
}
