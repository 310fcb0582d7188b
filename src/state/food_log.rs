use chrono::Local;

use crate::error::{Result, TrackError};
use crate::models::{FoodEntry, NewFoodEntry};

/// Canonical calendar-day form. Today-filtering compares these strings, so
/// the local midnight rolls the day over.
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Today's date in the canonical form.
pub fn today_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn now_time_string() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Append/update/delete store of food entries, persisted as a plain JSON
/// array under the `foodLog` key.
///
/// Ids are assigned from a monotonically increasing counter and never
/// reassigned within a session; on reload the counter resumes past the
/// highest stored id.
#[derive(Debug, Default)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
    next_id: u64,
}

impl FoodLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild the log from stored entries, keeping insertion order.
    pub fn from_entries(entries: Vec<FoodEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    /// Validate and append a new entry, stamping today's date and the
    /// current clock time.
    pub fn add(&mut self, input: NewFoodEntry) -> Result<&FoodEntry> {
        self.add_stamped(input, today_string(), now_time_string())
    }

    /// Append with an explicit stamp. The stamp is immutable afterwards.
    pub fn add_stamped(
        &mut self,
        input: NewFoodEntry,
        date: String,
        time: String,
    ) -> Result<&FoodEntry> {
        input.validate()?;

        let entry = FoodEntry {
            id: self.next_id,
            name: input.name.trim().to_string(),
            calories: input.calories,
            protein: input.protein,
            carbs: input.carbs,
            fats: input.fats,
            meal_type: input.meal_type,
            date,
            time,
        };
        self.next_id += 1;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace every editable field of an existing entry. The entry's id,
    /// date and time are left untouched.
    pub fn update(&mut self, id: u64, input: NewFoodEntry) -> Result<&FoodEntry> {
        input.validate()?;

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TrackError::EntryNotFound(id))?;

        entry.name = input.name.trim().to_string();
        entry.calories = input.calories;
        entry.protein = input.protein;
        entry.carbs = input.carbs;
        entry.fats = input.fats;
        entry.meal_type = input.meal_type;
        Ok(entry)
    }

    /// Remove by id. Returns whether an entry was removed; an absent id is
    /// not an error.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Entries logged on the given calendar day, in insertion order.
    /// Read-only; repeated calls on unchanged state return the same view.
    pub fn entries_on(&self, date: &str) -> Vec<&FoodEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Entries logged today.
    pub fn today_view(&self) -> Vec<&FoodEntry> {
        self.entries_on(&today_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
