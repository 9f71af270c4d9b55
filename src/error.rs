//! Validation errors for caller-supplied values.
//!
//! The classifier itself cannot fail once its inputs are valid, so every
//! error in this crate is raised at the boundary where raw values become
//! domain types.

use thiserror::Error;

// ---

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // ---
    #[error("concentration must be non-negative, got {0}")]
    NegativeConcentration(f64),

    #[error("concentration must be a finite number, got {0}")]
    NonFiniteConcentration(f64),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("a user name is required")]
    MissingName,
}
