use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(hira_fte::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(hira_fte::config))]
    Config(String),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    #[diagnostic(code(hira_fte::invalid_date), help("dates are ISO calendar dates, e.g. 2024-03-04"))]
    InvalidDate { value: String },

    #[error(transparent)]
    #[diagnostic(code(hira_fte::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(hira_fte::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(hira_fte::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type FteResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, value: &str) -> Error {
    Error::Environment(format!("Invalid value for {}: '{}'", var, value))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create date parsing errors
pub fn invalid_date(value: &str) -> Error {
    Error::InvalidDate {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = invalid_date("2024-13-01");
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_env_error_names_variable() {
        let err = env_error("FTE_MAX_WEEKS", "lots");
        assert_eq!(
            err.to_string(),
            "Environment error: Invalid value for FTE_MAX_WEEKS: 'lots'"
        );
    }
}
