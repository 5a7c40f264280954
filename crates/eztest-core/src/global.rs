//! Process-wide default registry.
//!
//! Opt-in convenience for callers that want free-function registration. The
//! registry is bounded at [`REFERENCE_CAPACITY`] and guarded by a mutex, so
//! registration from several threads is safe. Prefer an explicit
//! [`Registry`] where isolation matters.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::outcome::TestOutcome;
use crate::record::TestRecord;
use crate::registry::{REFERENCE_CAPACITY, Registry};
use crate::reporter::{ConsoleReporter, Reporter};
use crate::runner::{RunSummary, Runner};

static GLOBAL_REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

fn global_registry() -> &'static Mutex<Registry> {
    GLOBAL_REGISTRY.get_or_init(|| Mutex::new(Registry::with_capacity_limit(REFERENCE_CAPACITY)))
}

/// Register a test in the process-wide registry.
pub fn register<F, R>(name: impl Into<String>, predicate: F) -> bool
where
    F: Fn() -> R + Send + Sync + 'static,
    R: Into<TestOutcome>,
{
    global_registry().lock().register(name, predicate)
}

/// Names registered so far, in registration order.
#[must_use]
pub fn registered_names() -> Vec<String> {
    global_registry()
        .lock()
        .names()
        .map(str::to_string)
        .collect()
}

fn snapshot() -> Vec<TestRecord> {
    global_registry().lock().records().to_vec()
}

/// Run the process-wide registry with console output. Returns the failure
/// count.
pub fn run_tests() -> usize {
    run_tests_with(&mut ConsoleReporter::stdout()).failed
}

/// Run the process-wide registry through `reporter`.
///
/// Records are snapshotted first and executed with the lock released, so a
/// predicate that registers another test does not deadlock; the new test
/// runs on the next pass.
pub fn run_tests_with<R: Reporter + ?Sized>(reporter: &mut R) -> RunSummary {
    let records = snapshot();
    Runner::default().run_records(&records, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::CaptureReporter;

    // The registry is shared by every test in this binary, so names are
    // prefixed and assertions only look at this test's own entries.
    #[test]
    fn global_registration_keeps_order_and_runs() {
        assert!(register("global::unit::a", || true));
        assert!(register("global::unit::b", || false));

        let ours: Vec<String> = registered_names()
            .into_iter()
            .filter(|n| n.starts_with("global::unit::"))
            .collect();
        assert_eq!(ours, ["global::unit::a", "global::unit::b"]);

        let mut capture = CaptureReporter::new();
        let summary = run_tests_with(&mut capture);
        assert!(summary.failed >= 1);
        assert!(capture.failed_names().contains(&"global::unit::b"));
    }
}
