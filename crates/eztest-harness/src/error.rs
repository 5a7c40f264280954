//! Harness errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid capacity '{value}', expected unbounded|reference|<count>")]
    InvalidCapacity { value: String },
    #[error(transparent)]
    Registry(#[from] eztest_core::RegistryError),
}
