use hira_fte::config::Config;
use hira_fte::error::Error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the configured filter to
/// debug and `-vv` to trace.
pub fn init_logging(default_filter: &str, verbosity: u8) -> miette::Result<()> {
    let fallback = match verbosity {
        0 => default_filter.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config.
///
/// Runs before logging is set up, so failures surface only as the report
/// returned from main.
pub fn load_config() -> miette::Result<Config> {
    Ok(Config::load()?)
}
