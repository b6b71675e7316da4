//! Domain errors for MegaFilter
//!
//! Evaluating a specification never fails. These errors only surface from
//! the checked constructors and from configuration validation.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid range [{min}, {max}]: bounds must be ordered and not NaN")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid price scale: {reason}")]
    InvalidScale { reason: String },

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
