//! Built-in test suites and their explicit registration routine.

pub mod l2math;

use eztest_core::{Registry, TestOutcome};

/// A named predicate as shipped in a suite table.
pub type SuiteCase = (&'static str, fn() -> TestOutcome);

/// Outcome of registering a suite.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Names registered, in order.
    pub registered: Vec<&'static str>,
    /// Names the registry refused.
    pub rejected: Vec<&'static str>,
}

/// Register every case of `cases` that `select` accepts, in table order.
/// Refused registrations are collected rather than treated as fatal.
pub fn register_cases<S>(registry: &mut Registry, cases: &[SuiteCase], select: S) -> Registration
where
    S: Fn(&str) -> bool,
{
    let mut out = Registration::default();
    for &(name, predicate) in cases.iter().filter(|(name, _)| select(name)) {
        if registry.register(name, predicate) {
            out.registered.push(name);
        } else {
            out.rejected.push(name);
        }
    }
    out
}

/// Register the default suite (`l2math`).
pub fn register_all<S>(registry: &mut Registry, select: S) -> Registration
where
    S: Fn(&str) -> bool,
{
    register_cases(registry, l2math::CASES, select)
}
