use crate::cli::{Command, OutputFormat};
use hira_fte::components::Projector;
use hira_fte::config::Config;
use hira_fte::error::FteResult;
use serde::Serialize;

// Export submodules
pub mod project;
pub mod roster;
pub mod schema;

/// Shared context for all commands
#[derive(Debug)]
pub struct CommandContext {
    pub projector: Projector,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: &Config) -> Self {
        Self {
            projector: Projector::new(config.projector_settings()),
        }
    }
}

/// Rendered command output
pub type CommandResult = FteResult<String>;

/// Run a subcommand and return what it wants printed
pub fn run(ctx: &CommandContext, command: Command) -> CommandResult {
    match command {
        Command::Project(args) => project::run(ctx, &args),
        Command::Roster(args) => roster::run(ctx, &args),
        Command::Schema => schema::run(),
    }
}

/// Render a value as pretty JSON, or fall back to the table renderer
pub fn render<T, F>(format: OutputFormat, value: &T, table: F) -> CommandResult
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(value)),
    }
}
