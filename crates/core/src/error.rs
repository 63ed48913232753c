//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. All three kinds are
/// recoverable and request-scoped; none is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No customer exists for the supplied key.
    #[error("customer not found")]
    NotFound,

    /// A customer with this key is already registered.
    #[error("customer already exists: {0}")]
    DuplicateKey(String),

    /// A withdrawal exceeded the computed balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn duplicate_key(cpf: impl Into<String>) -> Self {
        Self::DuplicateKey(cpf.into())
    }
}
