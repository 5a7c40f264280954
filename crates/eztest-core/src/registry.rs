//! Ordered test registry.
//!
//! Records are appended in registration order and never removed or reordered,
//! so `records()[..len]` is always exactly the sequence of successful
//! registrations. An optional capacity limit reproduces the fixed-size table
//! of the reference harness.

use crate::error::RegistryError;
use crate::outcome::TestOutcome;
use crate::record::TestRecord;

/// Capacity of the reference harness's fixed test table.
pub const REFERENCE_CAPACITY: usize = 1000;

/// Ordered collection of [`TestRecord`]s.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    records: Vec<TestRecord>,
    capacity_limit: Option<usize>,
}

impl Registry {
    /// Create an empty, unbounded registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that accepts at most `limit` tests.
    #[must_use]
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            records: Vec::with_capacity(limit.min(REFERENCE_CAPACITY)),
            capacity_limit: Some(limit),
        }
    }

    /// Create an empty registry bounded at [`REFERENCE_CAPACITY`].
    #[must_use]
    pub fn with_reference_capacity() -> Self {
        Self::with_capacity_limit(REFERENCE_CAPACITY)
    }

    /// Register a test. Returns `false` without mutating the registry when it
    /// is full or the name is empty.
    pub fn register<F, R>(&mut self, name: impl Into<String>, predicate: F) -> bool
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<TestOutcome>,
    {
        self.try_register(name, predicate).is_ok()
    }

    /// Register a test, returning the slot it landed in.
    pub fn try_register<F, R>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
    ) -> Result<usize, RegistryError>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<TestOutcome>,
    {
        let name = name.into();
        self.check_slot_available(&name)?;
        Ok(self.push(TestRecord::new(name, predicate)))
    }

    /// Register an already-built record.
    pub fn try_register_record(&mut self, record: TestRecord) -> Result<usize, RegistryError> {
        self.check_slot_available(record.name())?;
        Ok(self.push(record))
    }

    fn check_slot_available(&self, name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        match self.capacity_limit {
            Some(capacity) if self.records.len() >= capacity => {
                Err(RegistryError::CapacityExhausted { capacity })
            }
            _ => Ok(()),
        }
    }

    fn push(&mut self, record: TestRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Filled slots, in registration order.
    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Names of the filled slots, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(TestRecord::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// True when a capacity limit exists and every slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity_limit
            .is_some_and(|capacity| self.records.len() >= capacity)
    }
}
