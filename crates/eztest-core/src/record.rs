//! Test records: a display name paired with a predicate.

use std::fmt;
use std::sync::Arc;

use crate::outcome::TestOutcome;

/// Shared handle to a zero-argument test predicate.
///
/// The registry only holds the handle; whatever the closure captures stays
/// owned by the code that defined the test.
pub type Predicate = Arc<dyn Fn() -> TestOutcome + Send + Sync>;

/// One registered test. Immutable once built.
#[derive(Clone)]
pub struct TestRecord {
    name: String,
    predicate: Predicate,
}

impl TestRecord {
    /// Wrap any predicate whose result converts into a [`TestOutcome`]
    /// (`bool`, `TestOutcome`, `Result<(), impl Display>`).
    pub fn new<F, R>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<TestOutcome>,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(move || -> TestOutcome { predicate().into() }),
        }
    }

    /// Build a record around an existing predicate handle.
    #[must_use]
    pub fn from_predicate(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Invoke the predicate once.
    pub fn evaluate(&self) -> TestOutcome {
        (self.predicate)()
    }
}

impl fmt::Debug for TestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRecord")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
