//! Integration test: running the process-wide registry.
//!
//! Kept to a single test so nothing else registers into the global registry
//! of this process while the counts are checked.
//!
//! Run: cargo test -p eztest-core --test global_run_test

use std::sync::atomic::{AtomicBool, Ordering};

use eztest_core::{CaptureReporter, Notice, global};

static REGISTERED_LATE: AtomicBool = AtomicBool::new(false);

fn registers_late_test() -> bool {
    if !REGISTERED_LATE.swap(true, Ordering::SeqCst) {
        assert!(global::register("late", || false));
    }
    true
}

#[test]
fn run_tests_counts_failures_and_defers_tests_registered_mid_run() {
    assert_eq!(global::run_tests(), 0);

    assert!(global::register("reentrant", registers_late_test));

    // First pass runs the snapshot taken before the predicate registered.
    let mut first = CaptureReporter::new();
    let summary = global::run_tests_with(&mut first);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        first.notices,
        vec![
            Notice::Running("reentrant".into()),
            Notice::Passed("reentrant".into()),
        ]
    );
    assert_eq!(global::registered_names(), ["reentrant", "late"]);

    // The late test joins on the next pass.
    let mut second = CaptureReporter::new();
    let summary = global::run_tests_with(&mut second);
    assert_eq!(summary.total, 2);
    assert_eq!(second.failed_names(), ["late"]);

    assert!(global::register("also_failing", || false));
    assert_eq!(global::run_tests(), 2);
    assert_eq!(global::run_tests(), 2);
}
