//! Server configuration read from the environment once at startup.

use std::path::PathBuf;

use chronicle_check::GradingConfig;
use thiserror::Error;

const DEFAULT_INSTRUCTOR_EMAIL: &str = "instructor@example.com";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of scenario documents; `None` serves the embedded set.
    pub content_dir: Option<PathBuf>,
    /// Recipient shown on generated session reports.
    pub instructor_email: String,
    pub grading: GradingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            content_dir: None,
            instructor_email: DEFAULT_INSTRUCTOR_EMAIL.to_string(),
            grading: GradingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `CHRONICLE_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let parse = |var: &'static str| -> Result<Option<i64>, ConfigError> {
            match lookup(var) {
                Some(value) => value
                    .trim()
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidNumber { var, value }),
                None => Ok(None),
            }
        };

        let port = match parse("CHRONICLE_PORT")? {
            Some(p) => u16::try_from(p).map_err(|_| ConfigError::InvalidNumber {
                var: "CHRONICLE_PORT",
                value: p.to_string(),
            })?,
            None => defaults.port,
        };
        let narrow = |var: &'static str, value: Option<i64>, default: i32| match value {
            Some(v) => i32::try_from(v).map_err(|_| ConfigError::InvalidNumber {
                var,
                value: v.to_string(),
            }),
            None => Ok(default),
        };

        let grading = GradingConfig {
            contemporary_window_years: narrow(
                "CHRONICLE_CONTEMPORARY_YEARS",
                parse("CHRONICLE_CONTEMPORARY_YEARS")?,
                defaults.grading.contemporary_window_years,
            )?,
            long_after_years: narrow(
                "CHRONICLE_LONG_AFTER_YEARS",
                parse("CHRONICLE_LONG_AFTER_YEARS")?,
                defaults.grading.long_after_years,
            )?,
        };

        Ok(ServerConfig {
            host: lookup("CHRONICLE_HOST").unwrap_or(defaults.host),
            port,
            content_dir: lookup("CHRONICLE_CONTENT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            instructor_email: lookup("CHRONICLE_INSTRUCTOR_EMAIL")
                .unwrap_or(defaults.instructor_email),
            grading,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert!(config.content_dir.is_none());
        assert_eq!(config.grading, GradingConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CHRONICLE_PORT", "9100"),
            ("CHRONICLE_HOST", "127.0.0.1"),
            ("CHRONICLE_CONTENT_DIR", "/srv/scenarios"),
            ("CHRONICLE_LONG_AFTER_YEARS", "100"),
            ("CHRONICLE_INSTRUCTOR_EMAIL", "prof@example.edu"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9100");
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/scenarios")));
        assert_eq!(config.grading.long_after_years, 100);
        assert_eq!(config.grading.contemporary_window_years, 10);
        assert_eq!(config.instructor_email, "prof@example.edu");
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = ServerConfig::from_lookup(lookup(&[("CHRONICLE_CONTEMPORARY_YEARS", "ten")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "CHRONICLE_CONTEMPORARY_YEARS must be an integer, got 'ten'"
        );
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(ServerConfig::from_lookup(lookup(&[("CHRONICLE_PORT", "70000")])).is_err());
    }
}
