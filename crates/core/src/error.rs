//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised by the workflow layer. The inventory store itself never fails: its
/// lookups return `None` and its deletes report a `bool`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Form input was rejected before it reached the store.
    #[error("validation failed: {0}")]
    Input(#[from] InputError),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Why a part or product form was rejected.
///
/// One variant per message the user sees when a save is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// A numeric field was blank or could not be parsed.
    #[error("form contains blank fields or missing values ({field})")]
    MissingValue { field: &'static str },

    #[error("machine id may only contain numbers")]
    InvalidMachineId,

    #[error("min must be a number greater than 0 and less than max")]
    InvalidMin,

    #[error("stock must be a number equal to or between min and max")]
    InvalidStock,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("price cannot be negative")]
    NegativePrice,
}
