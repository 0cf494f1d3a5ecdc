//! Prototype error model.

use thiserror::Error;

/// Result type used across the prototype capability.
pub type PrototypeResult<T> = Result<T, PrototypeError>;

/// Failure raised while producing a copy.
///
/// Keep this focused on the one real failure mode: the runtime could not
/// obtain memory. Setters and getters on primitive fields cannot fail and
/// get no error kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrototypeError {
    /// Memory could not be obtained during construction or cloning.
    ///
    /// Platform-level, not recoverable locally; callers propagate it.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),
}

impl PrototypeError {
    pub fn allocation_failure(msg: impl Into<String>) -> Self {
        Self::AllocationFailure(msg.into())
    }
}
