//! Configuration loading from the process environment.

use std::env;
use std::fmt;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Validation(Vec<ValidationError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Validation(errors) => {
                write!(f, "validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raw string values as read from the environment, pre-validation.
#[derive(Debug, Clone)]
pub struct RawConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: String,
    pub port: String,
}

impl RawConfig {
    /// Read raw values, applying defaults for unset variables. An unset
    /// `LOG_FORMAT` stays empty here; validation derives it from the
    /// environment.
    pub fn from_env() -> Self {
        Self {
            env: env_or("APP_ENV", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_format: env_or("LOG_FORMAT", ""),
            port: env_or("SERVER_PORT", "8080"),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        validate(&RawConfig::from_env()).map_err(ConfigError::Validation)
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
