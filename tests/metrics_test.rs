use assert_float_eq::assert_float_absolute_eq;

use nutri_track_rs::models::{ActivityLevel, Gender, Goal, UserHealthProfile};
use nutri_track_rs::planner::{
    BmiCategory, DietPlan, HealthMetrics, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT,
    KCAL_PER_GRAM_PROTEIN, MealPlan, bmi, bmi_category, bmr, goal_calories, tdee,
};

fn make_profile(gender: Gender, age: u32, height_cm: f64, weight_kg: f64) -> UserHealthProfile {
    UserHealthProfile {
        gender,
        age,
        height_cm,
        weight_kg,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintain,
        meals_per_day: 3,
        dietary_preference: String::new(),
        allergies: String::new(),
        health_conditions: String::new(),
    }
}

#[test]
fn test_bmr_reference_values() {
    // Revised Harris-Benedict, male: 88.362 + 13.397*70 + 4.799*175 - 5.677*30
    assert_float_absolute_eq!(bmr(Gender::Male, 70.0, 175.0, 30), 1695.667, 0.001);

    // Gender changes the equation, not just the coefficients' scale
    let male = bmr(Gender::Male, 70.0, 175.0, 30);
    let female = bmr(Gender::Female, 70.0, 175.0, 30);
    assert!(male > female);
}

#[test]
fn test_tdee_uses_exact_multipliers() {
    let base = 1695.667;
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Sedentary), base * 1.20, 0.001);
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Light), base * 1.375, 0.001);
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Moderate), base * 1.55, 0.001);
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Active), base * 1.725, 0.001);
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Extra), base * 1.90, 0.001);
}

#[test]
fn test_goal_offsets_are_fixed_500() {
    for t in [1500.0, 2000.0, 3000.0] {
        assert_float_absolute_eq!(goal_calories(t, Goal::Lose), t - 500.0, 1e-9);
        assert_float_absolute_eq!(goal_calories(t, Goal::Maintain), t, 1e-9);
        assert_float_absolute_eq!(goal_calories(t, Goal::Gain), t + 500.0, 1e-9);
    }
}

#[test]
fn test_bmi_and_category_for_reference_profile() {
    let value = bmi(70.0, 175.0);
    assert_float_absolute_eq!(value, 22.857, 0.001);
    assert_eq!(bmi_category(value), BmiCategory::NormalWeight);
    assert_eq!(bmi_category(value).label(), "Normal weight");
}

#[test]
fn test_metrics_determinism_across_profiles() {
    let profiles = [
        make_profile(Gender::Male, 30, 175.0, 70.0),
        make_profile(Gender::Female, 25, 165.0, 60.0),
        make_profile(Gender::Male, 64, 180.0, 95.0),
    ];

    for profile in &profiles {
        let a = HealthMetrics::for_profile(profile).unwrap();
        let b = HealthMetrics::for_profile(profile).unwrap();
        assert_eq!(a.bmi, b.bmi);
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.tdee, b.tdee);
        assert_eq!(a.goal_calories, b.goal_calories);
    }
}

#[test]
fn test_out_of_range_profile_produces_no_metrics() {
    let mut profile = make_profile(Gender::Male, 30, 175.0, 70.0);
    profile.height_cm = 40.0;
    assert!(HealthMetrics::for_profile(&profile).is_err());

    profile.height_cm = 175.0;
    profile.age = 150;
    assert!(HealthMetrics::for_profile(&profile).is_err());
}

#[test]
fn test_macro_split_energy_reconstruction() {
    for calories in [1400.0, 1800.0, 2034.8, 2500.0, 3100.0] {
        let plan = DietPlan::for_calories(calories);
        let energy = plan.protein_g as f64 * KCAL_PER_GRAM_PROTEIN
            + plan.carbs_g as f64 * KCAL_PER_GRAM_CARBS
            + plan.fats_g as f64 * KCAL_PER_GRAM_FAT;
        assert!(
            (energy - calories).abs() < 7.0,
            "{calories} kcal reconstructed as {energy}"
        );
    }
}

#[test]
fn test_meal_plan_division_not_redistributed() {
    let diet = DietPlan::for_calories(2034.8);
    let meals = MealPlan::for_diet(&diet, 3);

    // Each field rounds on its own; drift against the daily total stays
    // within one unit per meal.
    assert!((meals.calories * 3).abs_diff(diet.calories) <= 3);
    assert!((meals.protein_g * 3).abs_diff(diet.protein_g) <= 3);
    assert!((meals.carbs_g * 3).abs_diff(diet.carbs_g) <= 3);
    assert!((meals.fats_g * 3).abs_diff(diet.fats_g) <= 3);
}
