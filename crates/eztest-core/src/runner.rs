//! Test execution engine.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::outcome::TestOutcome;
use crate::record::TestRecord;
use crate::registry::Registry;
use crate::reporter::{ConsoleReporter, Reporter};

/// Result of running a single test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Slot the test was registered in.
    pub index: usize,
    /// Display name of the test.
    pub name: String,
    /// What the predicate returned.
    pub outcome: TestOutcome,
    /// Wall-clock time spent in the predicate.
    pub elapsed_us: u64,
}

impl TestResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome.is_pass()
    }
}

/// Aggregate outcome of one pass over a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Name of the run (suite or campaign).
    pub campaign: String,
    /// Tests executed.
    pub total: usize,
    /// Tests passed.
    pub passed: usize,
    /// Tests failed.
    pub failed: usize,
    /// Individual results, in registration order.
    pub results: Vec<TestResult>,
}

impl RunSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(campaign: impl Into<String>, results: Vec<TestResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            campaign: campaign.into(),
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes only, for comparing runs.
    #[must_use]
    pub fn outcomes(&self) -> Vec<(&str, &TestOutcome)> {
        self.results
            .iter()
            .map(|r| (r.name.as_str(), &r.outcome))
            .collect()
    }
}

/// Executes registries in registration order.
#[derive(Debug, Clone)]
pub struct Runner {
    /// Name reported in the run summary.
    pub campaign: String,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new("eztest")
    }
}

impl Runner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run every registered test, printing notices to stdout. Returns the
    /// number of failed tests.
    ///
    /// Stdout write errors do not affect the count and are not reported; use
    /// [`Runner::run_with`] with a [`ConsoleReporter`] and check
    /// [`ConsoleReporter::error`] when they matter.
    pub fn run(&self, registry: &Registry) -> usize {
        self.run_with(registry, &mut ConsoleReporter::stdout()).failed
    }

    /// Run every registered test through `reporter`.
    pub fn run_with<R: Reporter + ?Sized>(
        &self,
        registry: &Registry,
        reporter: &mut R,
    ) -> RunSummary {
        self.run_records(registry.records(), reporter)
    }

    /// Run an ordered slice of records. The scan covers every record; a
    /// failing test never stops the pass.
    pub fn run_records<R: Reporter + ?Sized>(
        &self,
        records: &[TestRecord],
        reporter: &mut R,
    ) -> RunSummary {
        reporter.on_run_start(records.len());

        let mut results = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            reporter.on_test_start(index, record.name());
            let started = Instant::now();
            let outcome = record.evaluate();
            let elapsed = started.elapsed();
            reporter.on_test_complete(index, record.name(), &outcome, elapsed);
            results.push(TestResult {
                index,
                name: record.name().to_string(),
                outcome,
                elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            });
        }

        let summary = RunSummary::from_results(self.campaign.clone(), results);
        reporter.on_run_complete(&summary);
        summary
    }
}

/// Map a failure count to a process exit status: 0 when everything passed,
/// otherwise the count saturated at 255 so it never wraps back to success.
#[must_use]
pub fn exit_status(failures: usize) -> u8 {
    u8::try_from(failures).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::{CaptureReporter, Notice};

    #[test]
    fn empty_registry_reports_nothing() {
        let mut capture = CaptureReporter::new();
        let summary = Runner::default().run_with(&Registry::new(), &mut capture);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.total, 0);
        assert!(capture.notices.is_empty());
        assert_eq!(capture.runs_completed, 1);
    }

    #[test]
    fn pass_then_fail_is_reported_in_order() {
        let mut registry = Registry::new();
        registry.register("A", || true);
        registry.register("B", || false);

        let mut capture = CaptureReporter::new();
        let summary = Runner::default().run_with(&registry, &mut capture);

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed, 1);
        assert_eq!(
            capture.notices,
            vec![
                Notice::Running("A".into()),
                Notice::Passed("A".into()),
                Notice::Running("B".into()),
                Notice::Failed("B".into(), None),
            ]
        );
    }

    #[test]
    fn failure_does_not_stop_the_scan() {
        let mut registry = Registry::new();
        registry.register("first", || false);
        registry.register("second", || false);
        registry.register("third", || true);

        let summary = Runner::default().run_with(&registry, &mut CaptureReporter::new());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.results[2].index, 2);
    }

    #[test]
    fn failure_message_is_carried() {
        let mut registry = Registry::new();
        registry.register("msg", || TestOutcome::fail("expected 3"));

        let mut capture = CaptureReporter::new();
        Runner::default().run_with(&registry, &mut capture);
        assert_eq!(
            capture.notices[1],
            Notice::Failed("msg".into(), Some("expected 3".into()))
        );
    }

    #[test]
    fn repeated_runs_match() {
        let mut registry = Registry::new();
        registry.register("ok", || true);
        registry.register("bad", || false);

        let runner = Runner::new("twice");
        let first = runner.run_with(&registry, &mut CaptureReporter::new());
        let second = runner.run_with(&registry, &mut CaptureReporter::new());
        assert_eq!(first.failed, second.failed);
        assert_eq!(first.outcomes(), second.outcomes());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn exit_status_saturates() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(3), 3);
        assert_eq!(exit_status(255), 255);
        assert_eq!(exit_status(256), 255);
        assert_eq!(exit_status(usize::MAX), 255);
    }
}
