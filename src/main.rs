use std::path::Path;

use clap::Parser;

use nutri_track_rs::cli::{Cli, Command, LogAction, ReportArg};
use nutri_track_rs::error::{Result, TrackError};
use nutri_track_rs::interface::{
    display_entries, display_metrics, display_plan, display_profile, display_progress,
    display_report, prompt_food_entry, prompt_profile, prompt_yes_no, resolve_entry,
};
use nutri_track_rs::planner::constants::WATER_GOAL_GLASSES;
use nutri_track_rs::report::write_csv;
use nutri_track_rs::state::{DirStore, KeyValueStore, Tracker};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = DirStore::new(&cli.dir);
    let mut tracker = Tracker::load(store)?;

    match cli.command.unwrap_or_default() {
        Command::Dashboard => cmd_dashboard(&tracker),
        Command::Profile { edit } => cmd_profile(&mut tracker, edit),
        Command::Log { action } => match action.unwrap_or_default() {
            LogAction::Add => cmd_log_add(&mut tracker),
            LogAction::List => cmd_log_list(&tracker),
            LogAction::Edit { name } => cmd_log_edit(&mut tracker, &name),
            LogAction::Remove { name } => cmd_log_remove(&mut tracker, &name),
        },
        Command::Water { set, reset } => cmd_water(&mut tracker, set, reset),
        Command::Plan => cmd_plan(&tracker),
        Command::Progress => cmd_progress(&tracker),
        Command::Report { kind, csv } => cmd_report(&tracker, kind, csv.as_deref()),
    }
}

/// Unwrap a mutation result, downgrading a failed write-back to a warning:
/// the in-memory state is already updated and stays authoritative.
fn apply<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(TrackError::PersistFailed(msg)) => {
            eprintln!("Warning: {}", msg);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Show metrics, plan, and progress in one screen.
fn cmd_dashboard<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<()> {
    if tracker.profile().is_none() {
        println!("No health profile yet. Run `nutri_track profile` to set one up.");
        return Ok(());
    }

    display_metrics(&tracker.metrics()?);
    display_plan(&tracker.diet_plan()?, &tracker.meal_plan()?);
    display_progress(&tracker.progress()?);
    Ok(())
}

/// Show the profile, or walk through the setup wizard.
fn cmd_profile<S: KeyValueStore>(tracker: &mut Tracker<S>, edit: bool) -> Result<()> {
    if let Some(profile) = tracker.profile() {
        if !edit {
            display_profile(profile);
            display_metrics(&tracker.metrics()?);
            println!("Use `profile --edit` to change it.");
            return Ok(());
        }
    } else {
        println!("Setting up a new health profile.");
        println!();
    }

    let profile = prompt_profile(tracker.profile())?;
    apply(tracker.set_profile(profile))?;

    display_metrics(&tracker.metrics()?);
    display_plan(&tracker.diet_plan()?, &tracker.meal_plan()?);
    Ok(())
}

fn cmd_log_add<S: KeyValueStore>(tracker: &mut Tracker<S>) -> Result<()> {
    let input = prompt_food_entry(None)?;

    if let Some(entry) = apply(tracker.add_entry(input))? {
        println!("Logged {} ({} kcal).", entry.name, entry.calories);
    }

    display_entries(&tracker.food_log().today_view());
    Ok(())
}

fn cmd_log_list<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<()> {
    display_entries(&tracker.food_log().today_view());
    Ok(())
}

fn cmd_log_edit<S: KeyValueStore>(tracker: &mut Tracker<S>, name: &str) -> Result<()> {
    let Some(id) = resolve_entry(&tracker.food_log().today_view(), name)? else {
        println!("No matching entry found for '{}'.", name);
        return Ok(());
    };

    let existing = tracker.food_log().get(id).cloned();
    let input = prompt_food_entry(existing.as_ref())?;

    if let Some(entry) = apply(tracker.update_entry(id, input))? {
        println!("Updated {}.", entry.name);
    }

    display_entries(&tracker.food_log().today_view());
    Ok(())
}

fn cmd_log_remove<S: KeyValueStore>(tracker: &mut Tracker<S>, name: &str) -> Result<()> {
    let Some(id) = resolve_entry(&tracker.food_log().today_view(), name)? else {
        println!("No matching entry found for '{}'.", name);
        return Ok(());
    };

    let entry_name = tracker
        .food_log()
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_default();

    if !prompt_yes_no(&format!("Remove '{}'?", entry_name), true)? {
        return Ok(());
    }

    if apply(tracker.remove_entry(id))?.unwrap_or(false) {
        println!("Removed {}.", entry_name);
    }

    display_entries(&tracker.food_log().today_view());
    Ok(())
}

fn cmd_water<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    set: Option<u32>,
    reset: bool,
) -> Result<()> {
    if reset {
        apply(tracker.reset_water())?;
        println!("Water intake reset.");
    } else if let Some(glasses) = set {
        apply(tracker.set_glasses(glasses))?;
    } else {
        apply(tracker.drink_glass())?;
    }

    let water = tracker.water();
    println!(
        "Water: {} of {} glasses.",
        water.glasses(),
        WATER_GOAL_GLASSES
    );
    Ok(())
}

fn cmd_plan<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<()> {
    display_plan(&tracker.diet_plan()?, &tracker.meal_plan()?);
    Ok(())
}

fn cmd_progress<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<()> {
    display_progress(&tracker.progress()?);
    Ok(())
}

fn cmd_report<S: KeyValueStore>(
    tracker: &Tracker<S>,
    kind: ReportArg,
    csv: Option<&str>,
) -> Result<()> {
    let report = match kind {
        ReportArg::Daily => tracker.daily_report()?,
        ReportArg::Weekly => tracker.weekly_report()?,
    };

    display_report(&report);

    if let Some(path) = csv {
        write_csv(&report, Path::new(path))?;
        println!("Report exported to {}.", path);
    }

    Ok(())
}
