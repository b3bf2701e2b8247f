use crate::components::availability::ProjectorSettings;
use crate::error::{config_error, env_error, FteResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Weeks emitted after the horizon start when every override is ongoing
pub const DEFAULT_FALLBACK_TAIL_WEEKS: u32 = 26;
/// Hard cap on the number of weeks in one projection
pub const DEFAULT_MAX_WEEKS: u32 = 52;
/// Length of the calendar-year strip
pub const DEFAULT_STRIP_WEEKS: u32 = 52;
/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Optional configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "config/projector.toml";

/// Main configuration structure for the projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Weeks emitted when no override has an explicit end
    pub fallback_tail_weeks: u32,
    /// Maximum number of weeks a single projection may emit
    pub max_weeks: u32,
    /// Number of weeks in a calendar-year strip
    pub strip_weeks: u32,
    /// Default tracing filter
    pub log_filter: String,
}

/// Values read from the TOML file; anything missing keeps its current value
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    fallback_tail_weeks: Option<u32>,
    max_weeks: Option<u32>,
    strip_weeks: Option<u32>,
    log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_tail_weeks: DEFAULT_FALLBACK_TAIL_WEEKS,
            max_weeks: DEFAULT_MAX_WEEKS,
            strip_weeks: DEFAULT_STRIP_WEEKS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment
    pub fn load() -> FteResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::load_from(Path::new(CONFIG_FILE), |key| env::var(key).ok())
    }

    /// Load configuration from `path`, then apply variables from `lookup`.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from<F>(path: &Path, lookup: F) -> FteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Ok(content) = fs::read_to_string(path) {
            let file: ConfigFile = toml::from_str(&content)?;
            config.merge_file(file);
        }

        config.apply_vars(lookup)?;
        config.validate()?;

        Ok(config)
    }

    fn merge_file(&mut self, file: ConfigFile) {
        if let Some(weeks) = file.fallback_tail_weeks {
            self.fallback_tail_weeks = weeks;
        }
        if let Some(weeks) = file.max_weeks {
            self.max_weeks = weeks;
        }
        if let Some(weeks) = file.strip_weeks {
            self.strip_weeks = weeks;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
    }

    fn apply_vars<F>(&mut self, lookup: F) -> FteResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(weeks) = parse_weeks(&lookup, "FTE_FALLBACK_TAIL_WEEKS")? {
            self.fallback_tail_weeks = weeks;
        }
        if let Some(weeks) = parse_weeks(&lookup, "FTE_MAX_WEEKS")? {
            self.max_weeks = weeks;
        }
        if let Some(weeks) = parse_weeks(&lookup, "FTE_STRIP_WEEKS")? {
            self.strip_weeks = weeks;
        }
        if let Some(filter) = lookup("FTE_LOG_FILTER") {
            self.log_filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> FteResult<()> {
        if self.fallback_tail_weeks == 0 {
            return Err(config_error("fallback_tail_weeks must be at least 1"));
        }
        if self.max_weeks == 0 {
            return Err(config_error("max_weeks must be at least 1"));
        }
        if self.strip_weeks == 0 {
            return Err(config_error("strip_weeks must be at least 1"));
        }
        Ok(())
    }

    /// Settings handed to the projector
    pub fn projector_settings(&self) -> ProjectorSettings {
        ProjectorSettings {
            fallback_tail_weeks: self.fallback_tail_weeks,
            max_weeks: self.max_weeks,
            strip_weeks: self.strip_weeks,
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> FteResult<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_str = toml::to_string(self)?;
        fs::write(path, toml_str)?;

        Ok(())
    }
}

fn parse_weeks<F>(lookup: &F, key: &str) -> FteResult<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| env_error(key, &raw)),
        None => Ok(None),
    }
}
