//! Log record data model.
//!
//! # Responsibilities
//! - Define the severity ladder and output format selectors
//! - Define typed log fields (string, int, float, duration)
//! - Hold a fully-resolved record on its way to the encoder
//!
//! # Design Decisions
//! - Levels are totally ordered; the logger filters by comparison
//! - Format selects encoding only; every record carries the same fields
//! - Records are built once per event and never mutated afterwards

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Log severity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Lowercase name used in structured output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// Output encoding selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Color-coded single-line output for interactive terminals.
    Console,
    /// One flat JSON object per line, for log processors.
    Json,
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Error)]
#[error("unknown log format: {0}")]
pub struct ParseFormatError(pub String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Format::Console),
            "json" => Ok(Format::Json),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

/// Typed value attached to a log field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Duration(Duration),
}

/// A named, typed log field.
#[derive(Debug, Clone)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn str(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Str(value.into()),
        }
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Int(value),
        }
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Float(value),
        }
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Duration(value),
        }
    }
}

/// A fully-resolved record, ready for encoding.
///
/// Bound fields (from `with_fields` ancestors) precede call-site fields.
pub(crate) struct Record<'a> {
    pub timestamp: String,
    pub level: Level,
    pub message: &'a str,
    pub caller: String,
    pub bound_fields: &'a [Field],
    pub fields: &'a [Field],
    /// Captured only for error-level records.
    pub stacktrace: Option<String>,
}
