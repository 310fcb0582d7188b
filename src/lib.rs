pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod report;
pub mod state;

pub use error::{Result, TrackError};
pub use models::{FoodEntry, MealType, NewFoodEntry, UserHealthProfile};
pub use state::Tracker;
