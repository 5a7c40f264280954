//! Predicate result type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of invoking one test predicate.
///
/// `bool` converts losslessly (`true` is [`TestOutcome::Pass`]), so plain
/// boolean predicates keep working; predicates that want to explain a failure
/// return `Fail(Some(message))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum TestOutcome {
    Pass,
    Fail(Option<String>),
}

impl TestOutcome {
    /// Failure with a diagnostic message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(Some(message.into()))
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Failure message, if the predicate supplied one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass | Self::Fail(None) => None,
            Self::Fail(Some(msg)) => Some(msg),
        }
    }
}

impl From<bool> for TestOutcome {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail(None) }
    }
}

impl<E: fmt::Display> From<Result<(), E>> for TestOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Pass,
            Err(err) => Self::fail(err.to_string()),
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("passed"),
            Self::Fail(None) => f.write_str("failed"),
            Self::Fail(Some(msg)) => write!(f, "failed: {msg}"),
        }
    }
}
