use std::{str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

pub const LOGIN_DELAY_MS_VAR: &str = "AIDHUB_LOGIN_DELAY_MS";
pub const LOG_LEVEL_VAR: &str = "AIDHUB_LOG_LEVEL";
pub const ERROR_LOG_CAPACITY_VAR: &str = "AIDHUB_ERROR_LOG_CAPACITY";
pub const PRETTY_EXPORT_VAR: &str = "AIDHUB_PRETTY_EXPORT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Cosmetic pause before a login completes, standing in for a network round-trip.
    pub login_delay: Duration,
    pub log_level: Level,
    /// How many error reports the in-app error console keeps.
    pub error_log_capacity: usize,
    /// Indent exported JSON documents.
    pub pretty_export: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1200),
            log_level: Level::INFO,
            error_log_capacity: 50,
            pretty_export: true,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset variables keep their defaults; a variable that is set but cannot be parsed
    /// is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a variable name, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(AppConfig)` - Defaults overridden by every variable the lookup provides
    /// - `Err(ConfigError::InvalidEnvValue)` - A provided value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64, _>(&lookup, LOGIN_DELAY_MS_VAR)? {
            config.login_delay = Duration::from_millis(ms);
        }
        if let Some(level) = parse_var::<Level, _>(&lookup, LOG_LEVEL_VAR)? {
            config.log_level = level;
        }
        if let Some(capacity) = parse_var::<usize, _>(&lookup, ERROR_LOG_CAPACITY_VAR)? {
            if capacity == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: ERROR_LOG_CAPACITY_VAR.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.error_log_capacity = capacity;
        }
        if let Some(pretty) = parse_var::<bool, _>(&lookup, PRETTY_EXPORT_VAR)? {
            config.pretty_export = pretty;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    /// Expect defaults when no variables are set
    #[test]
    fn uses_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    /// Expect provided values to override defaults
    #[test]
    fn overrides_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (LOGIN_DELAY_MS_VAR, "250"),
            (LOG_LEVEL_VAR, "debug"),
            (ERROR_LOG_CAPACITY_VAR, "10"),
            (PRETTY_EXPORT_VAR, "false"),
        ]))
        .unwrap();

        assert_eq!(config.login_delay, Duration::from_millis(250));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.error_log_capacity, 10);
        assert!(!config.pretty_export);
    }

    /// Expect Error naming the variable when a value does not parse
    #[test]
    fn fails_for_unparsable_value() {
        let result = AppConfig::from_lookup(lookup_from(&[(LOGIN_DELAY_MS_VAR, "soon")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == LOGIN_DELAY_MS_VAR
        ));
    }

    /// Expect Error when the error log capacity is zero
    #[test]
    fn fails_for_zero_capacity() {
        let result = AppConfig::from_lookup(lookup_from(&[(ERROR_LOG_CAPACITY_VAR, "0")]));

        assert!(result.is_err());
    }
}
