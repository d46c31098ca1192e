//! Configuration management utilities
//!
//! Every binary in the workspace is configured from the environment. These
//! helpers keep the lookups and their error messages uniform.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} not set")]
    Missing(String),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        key: String,
        reason: String,
    },
}

/// Read an environment variable, treating empty values as unset
pub fn env_var(key: &str) -> Option<String> {
    normalize(std::env::var(key).ok())
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a required environment variable
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env_var(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read and parse an environment variable, falling back to `default` when unset
pub fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_or(key, env_var(key), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match normalize(raw) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only unset variables are read from the process environment; values
    // are fed through the pure helpers.

    #[test]
    fn test_env_or_default() {
        let value: u64 = env_or("CASH_UTILS_TEST_UNSET", 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn test_parse_or_parses_trimmed_value() {
        let value: u64 = parse_or("MOEX_TIMEOUT_SECS", Some(" 15 ".to_string()), 30).unwrap();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_parse_or_blank_uses_default() {
        let value: u64 = parse_or("MOEX_TIMEOUT_SECS", Some("   ".to_string()), 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn test_parse_or_invalid() {
        let err = parse_or::<u64>("MOEX_TIMEOUT_SECS", Some("soon".to_string()), 30).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MOEX_TIMEOUT_SECS"));
    }

    #[test]
    fn test_env_required_missing() {
        let err = env_required("CASH_UTILS_TEST_MISSING").unwrap_err();
        assert_eq!(err.to_string(), "CASH_UTILS_TEST_MISSING not set");
    }

    #[test]
    fn test_empty_value_is_unset() {
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize(Some(" ru ".to_string())), Some("ru".to_string()));
        assert_eq!(normalize(None), None);
    }
}
