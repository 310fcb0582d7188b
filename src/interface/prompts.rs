use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{
    ActivityLevel, FoodEntry, Gender, Goal, MealType, NewFoodEntry, UserHealthProfile,
    validate_age, validate_height_cm, validate_meals_per_day, validate_weight_kg,
};

fn prompt_number<T>(prompt: &str, default: T, check: impl Fn(T) -> Result<()>) -> Result<T>
where
    T: Clone + std::fmt::Display + std::str::FromStr,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;

        let Ok(value) = input.trim().parse::<T>() else {
            println!("Invalid number.");
            continue;
        };

        match check(value.clone()) {
            Ok(()) => return Ok(value),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_select<T: Copy>(prompt: &str, options: &[T], labels: Vec<String>, default: usize) -> Result<T> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[selection])
}

fn position_of<T: PartialEq>(options: &[T], value: Option<T>) -> usize {
    value
        .and_then(|v| options.iter().position(|o| *o == v))
        .unwrap_or(0)
}

/// Walk the user through every profile field. Pre-fills from the existing
/// profile when editing.
pub fn prompt_profile(existing: Option<&UserHealthProfile>) -> Result<UserHealthProfile> {
    let gender = prompt_select(
        "Gender",
        &Gender::ALL,
        Gender::ALL.iter().map(|g| g.label().to_string()).collect(),
        position_of(&Gender::ALL, existing.map(|p| p.gender)),
    )?;

    let age = prompt_number(
        "Age (years)",
        existing.map(|p| p.age).unwrap_or(30),
        validate_age,
    )?;

    let height_cm = prompt_number(
        "Height (cm)",
        existing.map(|p| p.height_cm).unwrap_or(170.0),
        validate_height_cm,
    )?;

    let weight_kg = prompt_number(
        "Weight (kg)",
        existing.map(|p| p.weight_kg).unwrap_or(70.0),
        validate_weight_kg,
    )?;

    let activity_level = prompt_select(
        "Activity level",
        &ActivityLevel::ALL,
        ActivityLevel::ALL
            .iter()
            .map(|a| format!("{} ({})", a.label(), a.description()))
            .collect(),
        position_of(&ActivityLevel::ALL, existing.map(|p| p.activity_level)),
    )?;

    let goal = prompt_select(
        "Goal",
        &Goal::ALL,
        Goal::ALL.iter().map(|g| g.label().to_string()).collect(),
        position_of(&Goal::ALL, existing.map(|p| p.goal)),
    )?;

    let meals_per_day = prompt_number(
        "Meals per day",
        existing.map(|p| p.meals_per_day).unwrap_or(3),
        validate_meals_per_day,
    )?;

    let dietary_preference: String = Input::new()
        .with_prompt("Dietary preference (optional)")
        .default(existing.map(|p| p.dietary_preference.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let allergies: String = Input::new()
        .with_prompt("Allergies (optional)")
        .default(existing.map(|p| p.allergies.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let health_conditions: String = Input::new()
        .with_prompt("Health conditions (optional)")
        .default(existing.map(|p| p.health_conditions.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    Ok(UserHealthProfile {
        gender,
        age,
        height_cm,
        weight_kg,
        activity_level,
        goal,
        meals_per_day,
        dietary_preference: dietary_preference.trim().to_string(),
        allergies: allergies.trim().to_string(),
        health_conditions: health_conditions.trim().to_string(),
    })
}

fn check_grams(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(crate::error::TrackError::InvalidInput(
            "must be zero or more".to_string(),
        ))
    }
}

fn check_calories(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::error::TrackError::InvalidInput(
            "must be greater than zero".to_string(),
        ))
    }
}

/// Collect the editable fields of a food entry. Pre-fills from an existing
/// entry when editing.
pub fn prompt_food_entry(existing: Option<&FoodEntry>) -> Result<NewFoodEntry> {
    let meal_type = prompt_select(
        "Meal",
        &MealType::ALL,
        MealType::ALL.iter().map(|m| m.label().to_string()).collect(),
        position_of(&MealType::ALL, existing.map(|e| e.meal_type)),
    )?;

    let name: String = Input::new()
        .with_prompt("Food name")
        .default(existing.map(|e| e.name.clone()).unwrap_or_default())
        .interact_text()?;

    let calories = prompt_number(
        "Calories (kcal)",
        existing.map(|e| e.calories).unwrap_or(0.0),
        check_calories,
    )?;

    let protein = prompt_number(
        "Protein (g)",
        existing.map(|e| e.protein).unwrap_or(0.0),
        check_grams,
    )?;

    let carbs = prompt_number(
        "Carbs (g)",
        existing.map(|e| e.carbs).unwrap_or(0.0),
        check_grams,
    )?;

    let fats = prompt_number(
        "Fats (g)",
        existing.map(|e| e.fats).unwrap_or(0.0),
        check_grams,
    )?;

    Ok(NewFoodEntry {
        name: name.trim().to_string(),
        calories,
        protein,
        carbs,
        fats,
        meal_type,
    })
}

/// Resolve a user-supplied name to one of today's entries.
///
/// Tries an exact match first (case-insensitive), then falls back to fuzzy
/// matching, confirming a single candidate and letting the user pick among
/// several. Returns `None` when nothing matches or the user declines.
pub fn resolve_entry(entries: &[&FoodEntry], query: &str) -> Result<Option<u64>> {
    let query = query.trim().to_lowercase();

    let exact: Vec<&&FoodEntry> = entries
        .iter()
        .filter(|e| e.name.to_lowercase() == query)
        .collect();

    if exact.len() == 1 {
        return Ok(Some(exact[0].id));
    }

    if exact.len() > 1 {
        // Same name logged more than once today; pick by time.
        let options: Vec<String> = exact
            .iter()
            .map(|e| format!("{} at {} ({} kcal)", e.name, e.time, e.calories))
            .collect();
        let selection = Select::new()
            .with_prompt("Which entry?")
            .items(&options)
            .default(0)
            .interact()?;
        return Ok(Some(exact[selection].id));
    }

    let mut candidates: Vec<(&&FoodEntry, f64)> = entries
        .iter()
        .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let entry = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", entry.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(entry.id));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(e, _)| format!("{} at {} ({} kcal)", e.name, e.time, e.calories))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < candidates.len().min(5) {
        Ok(Some(candidates[selection].0.id))
    } else {
        Ok(None)
    }
}

/// Yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
