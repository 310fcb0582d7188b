use clap::{Parser, Subcommand, ValueEnum};

/// NutriTrack — health metrics, macro planning, and daily food/water tracking.
#[derive(Parser, Debug)]
#[command(name = "nutri_track")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the tracker's data files.
    #[arg(short, long, default_value = ".nutri_track")]
    pub dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show health metrics, the nutrition plan, and today's progress.
    Dashboard,

    /// Show the stored health profile, or set one up.
    Profile {
        /// Re-run the setup wizard even if a profile exists.
        #[arg(long)]
        edit: bool,
    },

    /// Manage the food log.
    Log {
        #[command(subcommand)]
        action: Option<LogAction>,
    },

    /// Track water intake. Drinks one glass unless an option is given.
    Water {
        /// Set the glass count directly (tap glass N).
        #[arg(long)]
        set: Option<u32>,

        /// Reset the count to zero.
        #[arg(long)]
        reset: bool,
    },

    /// Show the daily and per-meal nutrition plan.
    Plan,

    /// Show today's progress against the plan.
    Progress,

    /// Assemble a daily or weekly report.
    Report {
        #[arg(value_enum, default_value_t = ReportArg::Daily)]
        kind: ReportArg,

        /// Also export the report as CSV to the given path.
        #[arg(long)]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard
    }
}

#[derive(Subcommand, Debug)]
pub enum LogAction {
    /// Log a food entry interactively.
    Add,

    /// List today's entries.
    List,

    /// Edit one of today's entries, found by name.
    Edit { name: String },

    /// Remove one of today's entries, found by name.
    Remove { name: String },
}

impl Default for LogAction {
    fn default() -> Self {
        LogAction::List
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ReportArg {
    Daily,
    Weekly,
}

impl std::fmt::Display for ReportArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportArg::Daily => f.write_str("daily"),
            ReportArg::Weekly => f.write_str("weekly"),
        }
    }
}
