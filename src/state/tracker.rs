use crate::error::{Result, TrackError};
use crate::models::{FoodEntry, NewFoodEntry, Report, UserHealthProfile};
use crate::planner::{DayTotals, DietPlan, HealthMetrics, MealPlan, ProgressSnapshot};
use crate::report;
use crate::state::food_log::FoodLog;
use crate::state::store::{
    FOOD_LOG_KEY, KeyValueStore, PROFILE_KEY, WATER_KEY, load_record, save_record,
};
use crate::state::water::WaterIntake;

/// Single owner of all mutable tracking state.
///
/// Every mutator updates memory first, then synchronously rewrites the
/// affected record in the injected store. A failed write surfaces as
/// [`TrackError::PersistFailed`] while the in-memory mutation stays applied;
/// memory, not the store, is the source of truth. Derived values (metrics,
/// plans, progress, reports) are recomputed from current state on every
/// query and never cached.
pub struct Tracker<S: KeyValueStore> {
    store: S,
    profile: Option<UserHealthProfile>,
    food_log: FoodLog,
    water: WaterIntake,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load the three persisted records, treating absent keys as empty
    /// state.
    pub fn load(store: S) -> Result<Self> {
        let profile: Option<UserHealthProfile> = load_record(&store, PROFILE_KEY)?;
        let entries: Vec<FoodEntry> = load_record(&store, FOOD_LOG_KEY)?.unwrap_or_default();
        let glasses: u32 = load_record(&store, WATER_KEY)?.unwrap_or(0);

        Ok(Self {
            store,
            profile,
            food_log: FoodLog::from_entries(entries),
            water: WaterIntake::from_glasses(glasses),
        })
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn profile(&self) -> Option<&UserHealthProfile> {
        self.profile.as_ref()
    }

    pub fn food_log(&self) -> &FoodLog {
        &self.food_log
    }

    pub fn water(&self) -> &WaterIntake {
        &self.water
    }

    fn require_profile(&self) -> Result<&UserHealthProfile> {
        self.profile.as_ref().ok_or(TrackError::MissingProfile)
    }

    pub fn metrics(&self) -> Result<HealthMetrics> {
        HealthMetrics::for_profile(self.require_profile()?)
    }

    pub fn diet_plan(&self) -> Result<DietPlan> {
        Ok(DietPlan::for_calories(self.metrics()?.goal_calories))
    }

    pub fn meal_plan(&self) -> Result<MealPlan> {
        let meals_per_day = self.require_profile()?.meals_per_day;
        Ok(MealPlan::for_diet(&self.diet_plan()?, meals_per_day))
    }

    pub fn progress(&self) -> Result<ProgressSnapshot> {
        let plan = self.diet_plan()?;
        let totals = DayTotals::for_entries(self.food_log.today_view());
        Ok(ProgressSnapshot::compute(totals, &plan, &self.water))
    }

    pub fn daily_report(&self) -> Result<Report> {
        let profile = self.require_profile()?;
        let metrics = HealthMetrics::for_profile(profile)?;
        let plan = DietPlan::for_calories(metrics.goal_calories);
        let today = self.food_log.today_view();
        let totals = DayTotals::for_entries(today.iter().copied());
        let progress = ProgressSnapshot::compute(totals, &plan, &self.water);
        Ok(report::daily_report(
            profile, &metrics, &plan, &today, &progress,
        ))
    }

    pub fn weekly_report(&self) -> Result<Report> {
        let profile = self.require_profile()?;
        let metrics = HealthMetrics::for_profile(profile)?;
        let plan = DietPlan::for_calories(metrics.goal_calories);
        Ok(report::weekly_report(profile, &metrics, &plan))
    }

    // ── mutators ────────────────────────────────────────────────────────

    /// Replace the profile after validating every field.
    pub fn set_profile(&mut self, profile: UserHealthProfile) -> Result<()> {
        profile.validate()?;
        self.profile = Some(profile);
        persist(&mut self.store, PROFILE_KEY, &self.profile)
    }

    pub fn add_entry(&mut self, input: NewFoodEntry) -> Result<FoodEntry> {
        let entry = self.food_log.add(input)?.clone();
        persist(&mut self.store, FOOD_LOG_KEY, &self.food_log.entries())?;
        Ok(entry)
    }

    pub fn update_entry(&mut self, id: u64, input: NewFoodEntry) -> Result<FoodEntry> {
        let entry = self.food_log.update(id, input)?.clone();
        persist(&mut self.store, FOOD_LOG_KEY, &self.food_log.entries())?;
        Ok(entry)
    }

    /// Remove an entry by id; an absent id is a no-op and skips the
    /// write-back.
    pub fn remove_entry(&mut self, id: u64) -> Result<bool> {
        if !self.food_log.remove(id) {
            return Ok(false);
        }
        persist(&mut self.store, FOOD_LOG_KEY, &self.food_log.entries())?;
        Ok(true)
    }

    pub fn drink_glass(&mut self) -> Result<u32> {
        let glasses = self.water.drink();
        persist(&mut self.store, WATER_KEY, &self.water)?;
        Ok(glasses)
    }

    pub fn set_glasses(&mut self, glasses: u32) -> Result<u32> {
        let glasses = self.water.set(glasses)?;
        persist(&mut self.store, WATER_KEY, &self.water)?;
        Ok(glasses)
    }

    pub fn reset_water(&mut self) -> Result<()> {
        self.water.reset();
        persist(&mut self.store, WATER_KEY, &self.water)
    }
}

/// Write-back one record, downgrading store errors to `PersistFailed` so
/// callers can distinguish them from failures of the mutation itself.
fn persist<S: KeyValueStore, T: serde::Serialize>(store: &mut S, key: &str, record: &T) -> Result<()> {
    save_record(store, key, record).map_err(|e| TrackError::PersistFailed(e.to_string()))
}
