mod food_log;
mod store;
mod tracker;
mod water;

pub use food_log::{FoodLog, today_string};
pub use store::{
    DirStore, FOOD_LOG_KEY, KeyValueStore, MemoryStore, PROFILE_KEY, WATER_KEY, load_record,
    save_record,
};
pub use tracker::Tracker;
pub use water::WaterIntake;
