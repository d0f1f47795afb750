//! Error types for the form layer.
//!
//! User-input validation failures are not errors: they are data held in
//! [`crate::FieldErrors`] and rendered inline. The types here cover the two
//! places where an operation itself is refused.

use thiserror::Error;

/// Errors returned by [`crate::Form`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit attempted while at least one field fails validation.
    #[error("form is invalid: {failing} field(s) fail validation")]
    Invalid {
        /// Number of fields with a failing rule.
        failing: usize,
    },
}

/// Errors returned by [`crate::FormConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Minimum password length must be positive.
    #[error("minimum password length must be at least 1, got {0}")]
    MinPasswordLength(usize),
}
