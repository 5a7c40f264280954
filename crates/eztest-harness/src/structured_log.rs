//! Structured logging contract for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or any writer.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.
//! - [`validate_log_file`]: validates an entire JSONL file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

const LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Per-test verdict as it appears in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    /// Registry slot of the test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    /// Failure message supplied by the predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            suite: None,
            test_name: None,
            test_index: None,
            verdict: None,
            message: None,
            elapsed_us: None,
            total: None,
            failures: None,
            exit_code: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }

    /// Set the test name and registry slot.
    #[must_use]
    pub fn with_test(mut self, index: usize, name: impl Into<String>) -> Self {
        self.test_index = Some(index);
        self.test_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_elapsed_us(mut self, us: u64) -> Self {
        self.elapsed_us = Some(us);
        self
    }

    /// Set run totals.
    #[must_use]
    pub fn with_counts(mut self, total: usize, failures: usize) -> Self {
        self.total = Some(total);
        self.failures = Some(failures);
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// Writes structured JSONL log entries.
pub struct LogEmitter<W: Write> {
    writer: W,
    seq: u64,
    suite: String,
    run_id: String,
}

impl LogEmitter<BufWriter<File>> {
    /// Create an emitter that writes to a file, creating parent directories.
    pub fn to_file(path: &Path, suite: &str, run_id: &str) -> std::io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), suite, run_id))
    }
}

impl<W: Write> LogEmitter<W> {
    /// Create an emitter over any writer.
    pub fn new(writer: W, suite: &str, run_id: &str) -> Self {
        Self {
            writer,
            seq: 0,
            suite: suite.to_string(),
            run_id: run_id.to_string(),
        }
    }

    /// Generate the next trace ID.
    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.suite, self.run_id, self.seq)
    }

    /// Emit a populated entry, filling in trace_id and suite when unset.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<LogEntry> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.suite.is_none() {
            entry.suite = Some(self.suite.clone());
        }
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        Ok(entry)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug)]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: field '{}': {}",
            self.line_number, self.field, self.message
        )
    }
}

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(line: &str, line_number: usize) -> Result<(), Vec<LogValidationError>> {
    let err = |field: &str, message: &str| LogValidationError {
        line_number,
        field: field.to_string(),
        message: message.to_string(),
    };

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return Err(vec![err("<line>", &format!("invalid JSON: {e}"))]),
    };
    let Some(obj) = value.as_object() else {
        return Err(vec![err("<line>", "expected a JSON object")]);
    };

    let mut errors = Vec::new();
    for field in ["timestamp", "trace_id", "level", "event"] {
        match obj.get(field) {
            None => errors.push(err(field, "missing required field")),
            Some(v) if !v.is_string() => errors.push(err(field, "expected string")),
            Some(_) => {}
        }
    }

    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !LEVELS.contains(&level)
    {
        errors.push(err("level", &format!("unknown level '{level}'")));
    }

    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && trace_id.split("::").count() < 3
    {
        errors.push(err("trace_id", "expected '<suite>::<run>::<seq>'"));
    }

    if let Some(verdict) = obj.get("verdict").and_then(|v| v.as_str())
        && verdict != "pass"
        && verdict != "fail"
    {
        errors.push(err("verdict", &format!("unknown verdict '{verdict}'")));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate every non-empty line of a JSONL file. Returns the number of
/// valid lines and every error found.
pub fn validate_log_file(path: &Path) -> Result<(usize, Vec<LogValidationError>), HarnessError> {
    let content = std::fs::read_to_string(path)?;
    let mut valid = 0;
    let mut errors = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match validate_log_line(line, i + 1) {
            Ok(()) => valid += 1,
            Err(mut errs) => errors.append(&mut errs),
        }
    }
    Ok((valid, errors))
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

fn format_utc(secs: u64, millis: u32) -> String {
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{millis:03}Z",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60,
    )
}

// Days since 1970-01-01 to a proleptic Gregorian date.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}
