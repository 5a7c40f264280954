//! Per-test notice sinks.
//!
//! The runner reports through [`Reporter`] so output format stays separate
//! from execution. [`ConsoleReporter`] writes the line format tooling parses:
//!
//! ```text
//! Running test <name>...
//! Test <name> passed!
//! Running test <name>...
//! Test <name> failed!: <message>
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crate::outcome::TestOutcome;
use crate::runner::RunSummary;

/// Observer for runner progress.
pub trait Reporter {
    /// Called once before the first test, with the number of tests to run.
    fn on_run_start(&mut self, _total: usize) {}

    /// Called before a predicate is invoked.
    fn on_test_start(&mut self, index: usize, name: &str);

    /// Called after a predicate returns.
    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    );

    /// Called once after the scan ends.
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_run_start(&mut self, total: usize) {
        (**self).on_run_start(total);
    }

    fn on_test_start(&mut self, index: usize, name: &str) {
        (**self).on_test_start(index, name);
    }

    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    ) {
        (**self).on_test_complete(index, name, outcome, elapsed);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        (**self).on_run_complete(summary);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn on_run_start(&mut self, total: usize) {
        (**self).on_run_start(total);
    }

    fn on_test_start(&mut self, index: usize, name: &str) {
        (**self).on_test_start(index, name);
    }

    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    ) {
        (**self).on_test_complete(index, name, outcome, elapsed);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        (**self).on_run_complete(summary);
    }
}

// An absent reporter drops every notice.
impl<R: Reporter> Reporter for Option<R> {
    fn on_run_start(&mut self, total: usize) {
        if let Some(r) = self {
            r.on_run_start(total);
        }
    }

    fn on_test_start(&mut self, index: usize, name: &str) {
        if let Some(r) = self {
            r.on_test_start(index, name);
        }
    }

    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    ) {
        if let Some(r) = self {
            r.on_test_complete(index, name, outcome, elapsed);
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if let Some(r) = self {
            r.on_run_complete(summary);
        }
    }
}

/// "Running" line for a test.
#[must_use]
pub fn running_line(name: &str) -> String {
    format!("Running test {name}...")
}

/// Outcome line for a test.
#[must_use]
pub fn outcome_line(name: &str, outcome: &TestOutcome) -> String {
    match outcome {
        TestOutcome::Pass => format!("Test {name} passed!"),
        TestOutcome::Fail(None) => format!("Test {name} failed!"),
        TestOutcome::Fail(Some(msg)) => format!("Test {name} failed!: {msg}"),
    }
}

/// Plain-text reporter. Each line is flushed as soon as it is written so
/// output stays ordered relative to test execution.
pub struct ConsoleReporter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// First write error seen, if any. Later writes are skipped once one fails.
    #[must_use]
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let result = writeln!(self.writer, "{text}").and_then(|()| self.writer.flush());
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_test_start(&mut self, _index: usize, name: &str) {
        self.line(&running_line(name));
    }

    fn on_test_complete(
        &mut self,
        _index: usize,
        name: &str,
        outcome: &TestOutcome,
        _elapsed: Duration,
    ) {
        self.line(&outcome_line(name, outcome));
    }
}

/// A single notice recorded by [`CaptureReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Running(String),
    Passed(String),
    Failed(String, Option<String>),
}

/// Records notices in memory.
#[derive(Debug, Default)]
pub struct CaptureReporter {
    pub notices: Vec<Notice>,
    pub runs_completed: usize,
}

impl CaptureReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of tests reported failed, in order.
    #[must_use]
    pub fn failed_names(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Failed(name, _) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for CaptureReporter {
    fn on_test_start(&mut self, _index: usize, name: &str) {
        self.notices.push(Notice::Running(name.to_string()));
    }

    fn on_test_complete(
        &mut self,
        _index: usize,
        name: &str,
        outcome: &TestOutcome,
        _elapsed: Duration,
    ) {
        let notice = match outcome {
            TestOutcome::Pass => Notice::Passed(name.to_string()),
            TestOutcome::Fail(msg) => Notice::Failed(name.to_string(), msg.clone()),
        };
        self.notices.push(notice);
    }

    fn on_run_complete(&mut self, _summary: &RunSummary) {
        self.runs_completed += 1;
    }
}

/// Forwards every notice to two reporters, first `A` then `B`.
pub struct Tee<A, B>(pub A, pub B);

impl<A: Reporter, B: Reporter> Reporter for Tee<A, B> {
    fn on_run_start(&mut self, total: usize) {
        self.0.on_run_start(total);
        self.1.on_run_start(total);
    }

    fn on_test_start(&mut self, index: usize, name: &str) {
        self.0.on_test_start(index, name);
        self.1.on_test_start(index, name);
    }

    fn on_test_complete(
        &mut self,
        index: usize,
        name: &str,
        outcome: &TestOutcome,
        elapsed: Duration,
    ) {
        self.0.on_test_complete(index, name, outcome, elapsed);
        self.1.on_test_complete(index, name, outcome, elapsed);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.0.on_run_complete(summary);
        self.1.on_run_complete(summary);
    }
}
