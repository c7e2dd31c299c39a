//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent misuse of the pattern objects.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported operation: cannot {operation} on leaf node '{name}'")]
    UnsupportedOperation {
        operation: &'static str,
        name: String,
    },

    #[error("no strategy set")]
    NoStrategy,

    #[error("arithmetic overflow: {operation} of {a} and {b}")]
    Overflow {
        operation: &'static str,
        a: i64,
        b: i64,
    },

    #[error("invalid action: '{0}' (expected addition, subtraction or multiplication)")]
    InvalidAction(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
