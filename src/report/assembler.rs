use crate::models::{FoodEntry, Report, ReportKind, ReportSection, UserHealthProfile};
use crate::planner::constants::WATER_GOAL_GLASSES;
use crate::planner::{DietPlan, HealthMetrics, ProgressSnapshot};

/// Assemble the daily report: profile, health analysis, plan, today's
/// intake and progress, in that order.
pub fn daily_report(
    profile: &UserHealthProfile,
    metrics: &HealthMetrics,
    plan: &DietPlan,
    today: &[&FoodEntry],
    progress: &ProgressSnapshot,
) -> Report {
    Report {
        kind: ReportKind::Daily,
        sections: vec![
            personal_section(profile),
            health_section(metrics),
            plan_section(plan),
            intake_section(today),
            progress_section(progress),
        ],
    }
}

/// Assemble the weekly report.
///
/// Carries the profile-derived sections only; it does not aggregate
/// multi-day intake data.
pub fn weekly_report(
    profile: &UserHealthProfile,
    metrics: &HealthMetrics,
    plan: &DietPlan,
) -> Report {
    Report {
        kind: ReportKind::Weekly,
        sections: vec![
            personal_section(profile),
            health_section(metrics),
            plan_section(plan),
        ],
    }
}

fn personal_section(profile: &UserHealthProfile) -> ReportSection {
    let mut section = ReportSection::new("Personal Information");
    section.row("Gender", profile.gender.label());
    section.row("Age", format!("{} years", profile.age));
    section.row("Height", format!("{} cm", profile.height_cm));
    section.row("Weight", format!("{} kg", profile.weight_kg));
    section.row("Activity Level", profile.activity_level.label());
    section.row("Goal", profile.goal.label());
    section.row("Meals Per Day", profile.meals_per_day.to_string());
    if !profile.dietary_preference.is_empty() {
        section.row("Dietary Preference", profile.dietary_preference.as_str());
    }
    if !profile.allergies.is_empty() {
        section.row("Allergies", profile.allergies.as_str());
    }
    if !profile.health_conditions.is_empty() {
        section.row("Health Conditions", profile.health_conditions.as_str());
    }
    section
}

fn health_section(metrics: &HealthMetrics) -> ReportSection {
    let mut section = ReportSection::new("Health Analysis");
    section.row(
        "BMI",
        format!("{:.1} ({})", metrics.bmi, metrics.bmi_category),
    );
    section.row("BMR", format!("{:.0} kcal", metrics.bmr));
    section.row("TDEE", format!("{:.0} kcal", metrics.tdee));
    section.row("Goal Calories", format!("{:.0} kcal", metrics.goal_calories));
    section
}

fn plan_section(plan: &DietPlan) -> ReportSection {
    let mut section = ReportSection::new("Nutrition Plan");
    section.row("Calories", format!("{} kcal", plan.calories));
    section.row("Protein", format!("{} g", plan.protein_g));
    section.row("Carbs", format!("{} g", plan.carbs_g));
    section.row("Fats", format!("{} g", plan.fats_g));
    section
}

fn intake_section(today: &[&FoodEntry]) -> ReportSection {
    let mut section = ReportSection::new("Today's Food Intake");
    for entry in today {
        section.row(
            entry.meal_type.label(),
            format!(
                "{} | {} kcal | P {} g | C {} g | F {} g",
                entry.name, entry.calories, entry.protein, entry.carbs, entry.fats
            ),
        );
    }
    section
}

fn fmt_pct(pct: Option<u32>) -> String {
    match pct {
        Some(p) => format!("{p}%"),
        None => "n/a".to_string(),
    }
}

fn progress_section(progress: &ProgressSnapshot) -> ReportSection {
    let mut section = ReportSection::new("Daily Progress");
    section.row("Calories", fmt_pct(progress.calories_pct));
    section.row("Protein", fmt_pct(progress.protein_pct));
    section.row("Carbs", fmt_pct(progress.carbs_pct));
    section.row("Fats", fmt_pct(progress.fats_pct));
    section.row(
        "Water",
        format!(
            "{} of {} glasses ({}%)",
            progress.water_glasses, WATER_GOAL_GLASSES, progress.water_pct
        ),
    );
    section
}
