pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_entry, prompt_profile, prompt_yes_no, resolve_entry};
pub use render::{
    display_entries, display_metrics, display_plan, display_profile, display_progress,
    display_report,
};
