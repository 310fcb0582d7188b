use serde::Serialize;

use crate::models::FoodEntry;
use crate::planner::constants::WATER_GOAL_GLASSES;
use crate::planner::macros::DietPlan;
use crate::state::WaterIntake;

/// Sums of today's logged intake.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl DayTotals {
    pub fn for_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodEntry>,
    {
        let mut totals = Self::default();
        for entry in entries {
            totals.calories += entry.calories;
            totals.protein += entry.protein;
            totals.carbs += entry.carbs;
            totals.fats += entry.fats;
        }
        totals
    }
}

/// Today's intake expressed against the plan, clamped to 0..=100.
///
/// Percentages against a zero goal are left out entirely rather than
/// divided through.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressSnapshot {
    pub totals: DayTotals,
    pub calories_pct: Option<u32>,
    pub protein_pct: Option<u32>,
    pub carbs_pct: Option<u32>,
    pub fats_pct: Option<u32>,
    pub water_glasses: u32,
    pub water_pct: u32,
}

fn percent_of(total: f64, goal: u32) -> Option<u32> {
    if goal == 0 {
        return None;
    }
    let pct = (total / goal as f64 * 100.0).round() as u32;
    Some(pct.min(100))
}

impl ProgressSnapshot {
    /// Derive the snapshot from current inputs. Callers recompute on every
    /// query; nothing here is cached.
    pub fn compute(totals: DayTotals, plan: &DietPlan, water: &WaterIntake) -> Self {
        let glasses = water.glasses();
        let water_pct =
            ((glasses as f64 / WATER_GOAL_GLASSES as f64 * 100.0).round() as u32).min(100);

        Self {
            totals,
            calories_pct: percent_of(totals.calories, plan.calories),
            protein_pct: percent_of(totals.protein, plan.protein_g),
            carbs_pct: percent_of(totals.carbs, plan.carbs_g),
            fats_pct: percent_of(totals.fats, plan.fats_g),
            water_glasses: glasses,
            water_pct,
        }
    }
}
