pub mod calculations;
pub mod constants;
pub mod macros;
pub mod progress;

pub use calculations::{BmiCategory, HealthMetrics, bmi, bmi_category, bmr, goal_calories, tdee};
pub use constants::*;
pub use macros::{DietPlan, MealPlan};
pub use progress::{DayTotals, ProgressSnapshot};
