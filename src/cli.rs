use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Weekly effective-FTE projection for staffing rosters.
#[derive(Parser)]
#[command(
    name = "fte-projector",
    version,
    about = "Project availability overrides into weekly effective FTE"
)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Project a single override list on top of a base FTE.
    Project(ProjectArgs),
    /// Project every resource of a roster file.
    Roster(RosterArgs),
    /// Print the JSON schema of an availability override record.
    Schema,
}

/// Output rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Arguments for the `project` subcommand.
#[derive(clap::Args)]
pub struct ProjectArgs {
    /// JSON file holding an array of availability overrides.
    #[arg(short, long)]
    pub overrides: PathBuf,

    /// Base FTE used for weeks without an active override.
    #[arg(short, long, default_value_t = 1.0)]
    pub base: f64,

    /// First day to cover (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<String>,

    /// Last day to cover (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<String>,

    /// Cap on emitted weeks.
    #[arg(long)]
    pub max_weeks: Option<u32>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `roster` subcommand.
#[derive(clap::Args)]
pub struct RosterArgs {
    /// JSON file holding an array of resource rows.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Print weekly totals for a calendar year instead of per-resource series.
    #[arg(long)]
    pub totals: bool,

    /// Calendar year for totals (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Split totals by job name.
    #[arg(long)]
    pub by_job: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
