//! Field length limits for contact records
//!
//! This module defines the length bounds enforced on every contact field.
//! Violations result in `FieldError` values, which surface to callers as the
//! validation kind of the crate-wide [`Error`](crate::Error).
//!
//! ## Contract
//!
//! Lengths are measured in Unicode scalar values (`chars().count()`), not
//! bytes. A value is stored verbatim or rejected; no trimming or other
//! transformation is ever applied.

use thiserror::Error;

/// Maximum length of a contact identifier
pub const MAX_CONTACT_ID_LEN: usize = 10;

/// Maximum length of a first or last name
pub const MAX_NAME_LEN: usize = 10;

/// Required length of a phone number
pub const PHONE_LEN: usize = 10;

/// Maximum length of an address
pub const MAX_ADDRESS_LEN: usize = 30;

/// Field validation errors
///
/// Each variant names the offending field so callers can report which
/// constraint failed. Empty input and over-length input are both surfaced
/// through the same validation kind at the [`Error`](crate::Error) level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field is empty
    #[error("{field} cannot be empty")]
    Empty {
        /// Name of the offending field
        field: &'static str,
    },

    /// Field exceeds its maximum length
    #[error("{field} too long: {length} chars exceeds maximum {max}")]
    TooLong {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in chars
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Field does not match its required exact length
    #[error("{field} must be exactly {expected} chars, got {length}")]
    WrongLength {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in chars
        length: usize,
        /// Required length
        expected: usize,
    },
}

impl FieldError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Empty { field }
            | FieldError::TooLong { field, .. }
            | FieldError::WrongLength { field, .. } => field,
        }
    }
}

/// Validate a non-empty field against a maximum length
///
/// Returns `Ok(())` if the value is non-empty and at most `max` chars,
/// `Err(FieldError::Empty)` or `Err(FieldError::TooLong)` otherwise.
pub fn validate_bounded(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Empty { field });
    }
    let length = value.chars().count();
    if length > max {
        return Err(FieldError::TooLong { field, length, max });
    }
    Ok(())
}

/// Validate a field against an exact required length
///
/// Returns `Ok(())` if the value is exactly `expected` chars,
/// `Err(FieldError::WrongLength)` otherwise. Empty input fails the same way
/// (length 0 is never the required length for any contact field).
pub fn validate_exact(field: &'static str, value: &str, expected: usize) -> Result<(), FieldError> {
    let length = value.chars().count();
    if length != expected {
        return Err(FieldError::WrongLength {
            field,
            length,
            expected,
        });
    }
    Ok(())
}
