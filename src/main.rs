mod cli;
mod commands;
mod startup;

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::commands::CommandContext;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so the configured filter applies
    let config = startup::load_config()?;

    // Initialize logging
    startup::init_logging(&config.log_filter, cli.verbose)?;

    info!("Starting fte-projector");

    let context = CommandContext::new(&config);
    let output = commands::run(&context, cli.command)?;
    println!("{}", output);

    Ok(())
}
