//! Record encoders.
//!
//! # Responsibilities
//! - Render a record for an interactive terminal (console format)
//! - Render a record as one flat JSON object per line (json format)
//! - Apply the shared timestamp rule to both formats
//!
//! # Design Decisions
//! - Timestamp layout is fixed: local UTC offset as `±HHMM`, then
//!   `YYYY-MM-DD HH:MM:SS`, regardless of format
//! - Encoding failures are ignored by the caller; encoders never panic
//! - Durations render as their human-readable form (e.g. `1.5s`)

use std::io::Write;

use chrono::{DateTime, TimeZone};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::logging::record::{FieldValue, Format, Level, Record};

/// Render a timestamp as `±HHMM YYYY-MM-DD HH:MM:SS`.
pub(crate) fn encode_timestamp<Tz: TimeZone>(t: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%z %Y-%m-%d %H:%M:%S").to_string()
}

/// Encoding strategy selected once at logger construction.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Encoder {
    Console,
    Json,
}

impl Encoder {
    pub(crate) fn for_format(format: Format) -> Self {
        match format {
            Format::Console => Encoder::Console,
            Format::Json => Encoder::Json,
        }
    }

    /// Encode one record, newline-terminated, into `buf`.
    pub(crate) fn encode(&self, record: &Record<'_>, buf: &mut Vec<u8>) {
        match self {
            Encoder::Console => encode_console(record, buf),
            Encoder::Json => encode_json(record, buf),
        }
    }
}

fn level_tag(level: Level) -> String {
    let name = level.as_str().to_ascii_uppercase();
    match level {
        Level::Debug => name.blue().to_string(),
        Level::Info => name.green().to_string(),
        Level::Warn => name.yellow().to_string(),
        Level::Error => name.red().to_string(),
    }
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Str(s) => s.clone(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Duration(d) => format!("{:?}", d),
    }
}

fn encode_console(record: &Record<'_>, buf: &mut Vec<u8>) {
    let _ = write!(
        buf,
        "{} {} {} {}",
        record.timestamp,
        level_tag(record.level),
        record.caller,
        record.message,
    );
    for field in record.bound_fields.iter().chain(record.fields) {
        let _ = write!(buf, " {}={}", field.key, format_value(&field.value));
    }
    let _ = writeln!(buf);
    if let Some(stack) = &record.stacktrace {
        let _ = writeln!(buf, "{}", stack);
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    time: &'a str,
    level: &'a str,
    caller: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stacktrace: Option<&'a str>,
    #[serde(flatten)]
    fields: serde_json::Map<String, Value>,
}

fn json_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::Duration(d) => Value::String(format!("{:?}", d)),
    }
}

fn encode_json(record: &Record<'_>, buf: &mut Vec<u8>) {
    let mut fields = serde_json::Map::new();
    for field in record.bound_fields.iter().chain(record.fields) {
        fields.insert(field.key.clone(), json_value(&field.value));
    }
    let json = JsonRecord {
        time: &record.timestamp,
        level: record.level.as_str(),
        caller: &record.caller,
        msg: record.message,
        stacktrace: record.stacktrace.as_deref(),
        fields,
    };
    let _ = serde_json::to_writer(&mut *buf, &json);
    let _ = writeln!(buf);
}
