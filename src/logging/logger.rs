//! The logger adapter.
//!
//! # Responsibilities
//! - Build a leveled logger over a thread-safe sink
//! - Filter records below the configured level before any encoding work
//! - Resolve caller location and capture stack traces for error records
//! - Derive child loggers pre-bound with extra fields
//!
//! # Design Decisions
//! - The adapter exposes exactly debug/info/warn/error/with_fields/sync,
//!   composed over an encoder and a mutex-guarded sink
//! - Logging calls never fail observably: encoding and write errors are
//!   swallowed so logging cannot break a handler's control flow. Known
//!   trade-off: a broken sink loses records silently
//! - `#[track_caller]` resolves caller metadata to the caller of the
//!   logging method, so one-level wrappers report their own call site

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

use chrono::Local;
use thiserror::Error;

use crate::logging::encoder::{encode_timestamp, Encoder};
use crate::logging::record::{Field, Format, Level, Record};

/// Error constructing or flushing the logger's sink.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log sink unavailable: {0}")]
    Sink(#[from] io::Error),
}

struct Core {
    level: Level,
    encoder: Encoder,
    sink: Mutex<Box<dyn Write + Send>>,
}

/// Leveled, structured logger. Cheap to clone; clones share one sink.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    bound_fields: Vec<Field>,
}

impl Logger {
    /// Build a logger writing to stdout.
    ///
    /// Fails only if the sink cannot be constructed; stdout always can,
    /// but the contract covers future sink kinds.
    pub fn build(level: Level, format: Format) -> Result<Self, LoggerError> {
        Ok(Self::with_sink(level, format, Box::new(io::stdout())))
    }

    /// Build a logger over an arbitrary sink. Used by tests and by hosts
    /// that redirect output.
    pub fn with_sink(level: Level, format: Format, sink: Box<dyn Write + Send>) -> Self {
        Self {
            core: Arc::new(Core {
                level,
                encoder: Encoder::for_format(format),
                sink: Mutex::new(sink),
            }),
            bound_fields: Vec::new(),
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Debug, msg, fields);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Info, msg, fields);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Warn, msg, fields);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.log(Level::Error, msg, fields);
    }

    /// Derive a child logger with `fields` pre-bound to every record.
    /// The parent is unchanged; both share the sink and level.
    pub fn with_fields(&self, fields: &[Field]) -> Logger {
        let mut bound = self.bound_fields.clone();
        bound.extend_from_slice(fields);
        Logger {
            core: Arc::clone(&self.core),
            bound_fields: bound,
        }
    }

    /// Flush buffered records. Idempotent; call once at process exit.
    pub fn sync(&self) -> Result<(), LoggerError> {
        if let Ok(mut sink) = self.core.sink.lock() {
            sink.flush()?;
        }
        Ok(())
    }

    #[track_caller]
    fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        if level < self.core.level {
            return;
        }
        let caller = Location::caller();
        let record = Record {
            timestamp: encode_timestamp(Local::now()),
            level,
            message: msg,
            caller: format!("{}:{}", caller.file(), caller.line()),
            bound_fields: &self.bound_fields,
            fields,
            stacktrace: (level == Level::Error)
                .then(|| Backtrace::force_capture().to_string()),
        };
        let mut buf = Vec::with_capacity(256);
        self.core.encoder.encode(&record, &mut buf);
        // Write errors are deliberately dropped; see module docs.
        if let Ok(mut sink) = self.core.sink.lock() {
            let _ = sink.write_all(&buf);
        }
    }
}
