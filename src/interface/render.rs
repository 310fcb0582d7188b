use crate::models::{FoodEntry, Report, UserHealthProfile};
use crate::planner::constants::WATER_GOAL_GLASSES;
use crate::planner::{DietPlan, HealthMetrics, MealPlan, ProgressSnapshot};

/// Display a report with aligned label/value rows per section.
pub fn display_report(report: &Report) {
    println!();
    println!("=== {} report ===", report.kind);

    for section in &report.sections {
        println!();
        println!("--- {} ---", section.title);

        if section.rows.is_empty() {
            println!("  (none)");
            continue;
        }

        let max_label_len = section
            .rows
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        for (label, value) in &section.rows {
            println!("  {:<width$}  {}", label, value, width = max_label_len);
        }
    }

    println!();
}

/// Display the stored profile.
pub fn display_profile(profile: &UserHealthProfile) {
    println!();
    println!("=== Profile ===");
    println!("  Gender:          {}", profile.gender.label());
    println!("  Age:             {} years", profile.age);
    println!("  Height:          {} cm", profile.height_cm);
    println!("  Weight:          {} kg", profile.weight_kg);
    println!("  Activity level:  {}", profile.activity_level.label());
    println!("  Goal:            {}", profile.goal.label());
    println!("  Meals per day:   {}", profile.meals_per_day);
    if !profile.dietary_preference.is_empty() {
        println!("  Preference:      {}", profile.dietary_preference);
    }
    if !profile.allergies.is_empty() {
        println!("  Allergies:       {}", profile.allergies);
    }
    if !profile.health_conditions.is_empty() {
        println!("  Conditions:      {}", profile.health_conditions);
    }
    println!();
}

/// Display the health analysis block.
pub fn display_metrics(metrics: &HealthMetrics) {
    println!();
    println!("=== Health Analysis ===");
    println!("  BMI:           {:.1} ({})", metrics.bmi, metrics.bmi_category);
    println!("  BMR:           {:.0} kcal", metrics.bmr);
    println!("  TDEE:          {:.0} kcal", metrics.tdee);
    println!("  Goal calories: {:.0} kcal", metrics.goal_calories);
    println!();
}

/// Display the daily plan and its per-meal subdivision.
pub fn display_plan(diet: &DietPlan, meals: &MealPlan) {
    println!();
    println!("=== Nutrition Plan ===");
    println!(
        "  Daily:    {} kcal | P {} g | C {} g | F {} g",
        diet.calories, diet.protein_g, diet.carbs_g, diet.fats_g
    );
    println!(
        "  Per meal: {} kcal | P {} g | C {} g | F {} g  ({} meals)",
        meals.calories, meals.protein_g, meals.carbs_g, meals.fats_g, meals.meals_per_day
    );
    println!();
}

fn pct_label(pct: Option<u32>) -> String {
    match pct {
        Some(p) => format!("{p:>3}%"),
        None => " n/a".to_string(),
    }
}

/// Display today's progress against the plan.
pub fn display_progress(progress: &ProgressSnapshot) {
    println!();
    println!("=== Today's Progress ===");
    println!(
        "  Calories: {}  ({:.0} kcal)",
        pct_label(progress.calories_pct),
        progress.totals.calories
    );
    println!(
        "  Protein:  {}  ({:.0} g)",
        pct_label(progress.protein_pct),
        progress.totals.protein
    );
    println!(
        "  Carbs:    {}  ({:.0} g)",
        pct_label(progress.carbs_pct),
        progress.totals.carbs
    );
    println!(
        "  Fats:     {}  ({:.0} g)",
        pct_label(progress.fats_pct),
        progress.totals.fats
    );
    println!(
        "  Water:    {:>3}%  ({} of {} glasses)",
        progress.water_pct, progress.water_glasses, WATER_GOAL_GLASSES
    );
    println!();
}

/// Display a day's food entries in a numbered, aligned list.
pub fn display_entries(entries: &[&FoodEntry]) {
    if entries.is_empty() {
        println!("No entries logged today.");
        return;
    }

    println!();

    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. [{}] {:<width$} - {:>5.0} kcal | P {:>4.0} g | C {:>4.0} g | F {:>4.0} g | {}",
            i + 1,
            entry.meal_type.label(),
            entry.name,
            entry.calories,
            entry.protein,
            entry.carbs,
            entry.fats,
            entry.time,
            width = max_name_len
        );
    }

    let total: f64 = entries.iter().map(|e| e.calories).sum();
    println!();
    println!("Total: {} entries, {:.0} kcal", entries.len(), total);
    println!();
}
