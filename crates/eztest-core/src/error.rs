//! Registration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },
    #[error("test name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_limit() {
        let err = RegistryError::CapacityExhausted { capacity: 1000 };
        assert_eq!(err.to_string(), "registry is full (capacity 1000)");
        assert_eq!(
            RegistryError::EmptyName.to_string(),
            "test name must not be empty"
        );
    }
}
