//! Reporter that mirrors runner notices into a JSONL log.

use std::io::Write;
use std::time::Duration;

use eztest_core::{Reporter, RunSummary, TestOutcome, exit_status};

use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Verdict};

/// Emits `run_start`, `test_start`, `test_pass` / `test_fail` and
/// `run_complete` events.
pub struct JsonlReporter<W: Write> {
    emitter: LogEmitter<W>,
    error: Option<std::io::Error>,
}

impl<W: Write> JsonlReporter<W> {
    pub fn new(emitter: LogEmitter<W>) -> Self {
        Self {
            emitter,
            error: None,
        }
    }

    /// First write error seen, if any.
    #[must_use]
    pub fn error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    /// Flush and hand back the emitter, surfacing any earlier write error.
    pub fn finish(mut self) -> std::io::Result<LogEmitter<W>> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.emitter.flush()?;
        Ok(self.emitter)
    }

    fn record(&mut self, entry: LogEntry) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.emitter.emit_entry(entry) {
            self.error = Some(err);
        }
    }
}

fn entry(level: LogLevel, event: &str) -> LogEntry {
    LogEntry::new(String::new(), level, event)
}

impl<W: Write> Reporter for JsonlReporter<W> {
    fn on_run_start(&mut self, total: usize) {
        self.record(entry(LogLevel::Info, "run_start").with_counts(total, 0));
    }

    fn on_test_start(&mut self, index: usize, name: &str) {
        self.record(entry(LogLevel::Debug, "test_start").with_test(index, name));
    }

    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    ) {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        let e = match outcome {
            TestOutcome::Pass => entry(LogLevel::Info, "test_pass").with_verdict(Verdict::Pass),
            TestOutcome::Fail(msg) => {
                let e = entry(LogLevel::Error, "test_fail").with_verdict(Verdict::Fail);
                match msg {
                    Some(msg) => e.with_message(msg.clone()),
                    None => e,
                }
            }
        };
        self.record(e.with_test(index, name).with_elapsed_us(elapsed_us));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let level = if summary.all_passed() {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        self.record(
            entry(level, "run_complete")
                .with_counts(summary.total, summary.failed)
                .with_exit_code(i32::from(exit_status(summary.failed))),
        );
    }
}
