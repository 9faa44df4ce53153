//! Configuration validation.
//!
//! # Responsibilities
//! - Turn raw environment-variable strings into a typed `AppConfig`
//! - Check value domains (environment, level, format, port range)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RawConfig → Result<AppConfig, Vec<ValidationError>>

use thiserror::Error;

use crate::config::loader::RawConfig;
use crate::config::schema::{AppConfig, Environment};
use crate::logging::{Format, Level};

/// A single configuration violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid environment {0:?} (allowed: development, production)")]
    Environment(String),
    #[error("invalid log level {0:?} (allowed: debug, info, warn, error)")]
    LogLevel(String),
    #[error("invalid log format {0:?} (allowed: console, json)")]
    LogFormat(String),
    #[error("invalid port {0:?} (allowed: 1-65535)")]
    Port(String),
}

/// Validate raw values, collecting every violation.
pub fn validate(raw: &RawConfig) -> Result<AppConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let env = raw.env.parse::<Environment>().map_err(|_| {
        errors.push(ValidationError::Environment(raw.env.clone()));
    });
    let log_level = raw.log_level.parse::<Level>().map_err(|_| {
        errors.push(ValidationError::LogLevel(raw.log_level.clone()));
    });
    // Unset format derives from the environment: console in
    // development, JSON in production.
    let log_format = if raw.log_format.is_empty() {
        Ok(env.unwrap_or(Environment::Development).default_format())
    } else {
        raw.log_format.parse::<Format>().map_err(|_| {
            errors.push(ValidationError::LogFormat(raw.log_format.clone()));
        })
    };
    let port = match raw.port.parse::<u16>() {
        Ok(p) if p > 0 => Ok(p),
        _ => {
            errors.push(ValidationError::Port(raw.port.clone()));
            Err(())
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // No violations: every parse above succeeded.
    Ok(AppConfig {
        env: env.unwrap_or(Environment::Development),
        log_level: log_level.unwrap_or(Level::Info),
        log_format: log_format.unwrap_or(Format::Console),
        port: port.unwrap_or(8080),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawConfig {
        RawConfig {
            env: "production".into(),
            log_level: "warn".into(),
            log_format: "json".into(),
            port: "9090".into(),
        }
    }

    #[test]
    fn valid_values_produce_typed_config() {
        let config = validate(&raw()).unwrap();
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.log_level, Level::Warn);
        assert_eq!(config.log_format, Format::Json);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn each_invalid_knob_is_named() {
        let mut bad = raw();
        bad.env = "staging".into();
        assert_eq!(
            validate(&bad).unwrap_err(),
            vec![ValidationError::Environment("staging".into())]
        );

        let mut bad = raw();
        bad.log_level = "trace".into();
        assert_eq!(
            validate(&bad).unwrap_err(),
            vec![ValidationError::LogLevel("trace".into())]
        );

        let mut bad = raw();
        bad.log_format = "logfmt".into();
        assert_eq!(
            validate(&bad).unwrap_err(),
            vec![ValidationError::LogFormat("logfmt".into())]
        );

        for port in ["0", "70000", "not-a-port"] {
            let mut bad = raw();
            bad.port = port.into();
            assert_eq!(
                validate(&bad).unwrap_err(),
                vec![ValidationError::Port(port.into())]
            );
        }
    }

    #[test]
    fn unset_format_derives_from_environment() {
        let mut unset = raw();
        unset.log_format = String::new();
        assert_eq!(validate(&unset).unwrap().log_format, Format::Json);

        unset.env = "development".into();
        assert_eq!(validate(&unset).unwrap().log_format, Format::Console);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let bad = RawConfig {
            env: "qa".into(),
            log_level: "loud".into(),
            log_format: "xml".into(),
            port: "0".into(),
        };
        assert_eq!(validate(&bad).unwrap_err().len(), 4);
    }
}
