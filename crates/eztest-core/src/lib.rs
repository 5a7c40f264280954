//! Minimal registration-ordered test harness.
//!
//! This crate provides:
//! - [`Registry`]: ordered test records, optionally capacity-bounded
//! - [`Runner`]: executes a registry in registration order and counts failures
//! - [`Reporter`]: observer seam for per-test notices (console, capture, tee)
//! - [`TestOutcome`] and the `ensure*` macros for writing predicates
//! - [`global`]: an opt-in process-wide registry guarded by a lock

#![forbid(unsafe_code)]

pub mod error;
pub mod global;
#[macro_use]
pub mod macros;
pub mod outcome;
pub mod record;
pub mod registry;
pub mod reporter;
pub mod runner;

pub use error::RegistryError;
pub use outcome::TestOutcome;
pub use record::{Predicate, TestRecord};
pub use registry::{REFERENCE_CAPACITY, Registry};
pub use reporter::{CaptureReporter, ConsoleReporter, Notice, Reporter, Tee};
pub use runner::{RunSummary, Runner, TestResult, exit_status};
