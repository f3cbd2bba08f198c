//! Error types for the contact directory
//!
//! This module defines the error taxonomy used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Every error is terminal for the attempted operation and
//! leaves prior state unchanged; nothing is retried or logged away.

use crate::contact_id::ContactId;
use crate::limits::FieldError;
use thiserror::Error;

/// Result type alias for contact directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the contact directory
#[derive(Debug, Error)]
pub enum Error {
    /// A field value violates its constraint (empty, over length, or a
    /// wrong-length phone)
    #[error("validation failed: {0}")]
    Validation(#[from] FieldError),

    /// A contact with this identifier already exists
    #[error("contact {0} already exists")]
    DuplicateId(ContactId),

    /// No contact with this identifier exists
    #[error("contact not found: {0}")]
    NotFound(String),

    /// A required argument is absent or unusable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a duplicate-identifier error
    pub fn duplicate(id: ContactId) -> Self {
        Self::DuplicateId(id)
    }

    /// Create a "not found" error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this error is the validation kind
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
