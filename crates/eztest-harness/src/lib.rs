//! Tooling around the eztest core.
//!
//! This crate provides:
//! - Configuration: environment defaults layered under CLI flags
//! - Structured logging: JSONL run logs and a reporter that feeds them
//! - Report generation: markdown + JSON run reports
//! - The built-in l2math smoke suite the `harness` binary runs

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod jsonl_reporter;
pub mod report;
pub mod structured_log;
pub mod suite;

pub use config::{CapacityMode, HarnessConfig};
pub use error::HarnessError;
pub use jsonl_reporter::JsonlReporter;
pub use report::RunReport;
