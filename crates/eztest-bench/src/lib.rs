//! Shared fixtures for eztest benchmarks.

use eztest_core::Registry;

/// Registry of `count` trivially passing tests, with every `fail_every`-th
/// test failing (0 disables failures).
#[must_use]
pub fn populated_registry(count: usize, fail_every: usize) -> Registry {
    let mut registry = Registry::new();
    for i in 0..count {
        let passes = fail_every == 0 || (i + 1) % fail_every != 0;
        registry.register(format!("bench_{i}"), move || passes);
    }
    registry
}
