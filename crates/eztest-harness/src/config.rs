//! Harness configuration.
//!
//! Defaults come from the environment (`EZTEST_CAPACITY`, `EZTEST_LOG`,
//! `EZTEST_REPORT`); the CLI then overrides individual fields.

use std::path::PathBuf;

use eztest_core::{REFERENCE_CAPACITY, Registry};

use crate::error::HarnessError;

pub const ENV_CAPACITY: &str = "EZTEST_CAPACITY";
pub const ENV_LOG: &str = "EZTEST_LOG";
pub const ENV_REPORT: &str = "EZTEST_REPORT";

/// How many tests the run's registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityMode {
    /// Growable, no limit.
    #[default]
    Unbounded,
    /// Fixed at [`REFERENCE_CAPACITY`].
    Reference,
    /// Fixed at the given count.
    Limit(usize),
}

impl CapacityMode {
    /// Parse `unbounded`, `reference` or a decimal count (underscores allowed).
    #[must_use]
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        let s = raw.trim().to_ascii_lowercase();
        match s.as_str() {
            "" | "unbounded" | "none" | "growable" => Some(Self::Unbounded),
            "reference" | "ref" | "fixed" => Some(Self::Reference),
            other => other.replace('_', "").parse().ok().map(Self::Limit),
        }
    }

    /// Effective limit, if any.
    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Reference => Some(REFERENCE_CAPACITY),
            Self::Limit(n) => Some(n),
        }
    }

    /// Fresh registry honoring this mode.
    #[must_use]
    pub fn registry(self) -> Registry {
        match self.limit() {
            Some(limit) => Registry::with_capacity_limit(limit),
            None => Registry::new(),
        }
    }
}

impl std::str::FromStr for CapacityMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| HarnessError::InvalidCapacity {
            value: s.to_string(),
        })
    }
}

/// Resolved settings for one harness invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    pub capacity: CapacityMode,
    /// JSONL log destination.
    pub log_path: Option<PathBuf>,
    /// Markdown report destination; a JSON twin is written next to it.
    pub report_path: Option<PathBuf>,
    /// Suppress console notices.
    pub quiet: bool,
    /// Print the run totals and written paths to stderr.
    pub summary: bool,
    /// Register only suite tests whose name contains this substring.
    pub filter: Option<String>,
}

impl HarnessConfig {
    /// Read defaults from the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read defaults through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup(ENV_CAPACITY) {
            Some(raw) => raw.parse()?,
            None => CapacityMode::default(),
        };
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Ok(Self {
            capacity,
            log_path: path(ENV_LOG),
            report_path: path(ENV_REPORT),
            quiet: false,
            summary: false,
            filter: None,
        })
    }

    /// True when `name` passes the configured filter.
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| name.contains(f))
    }
}
