//! Contact identifier type
//!
//! The identifier is the unique key distinguishing one contact from another.
//! It is fixed at construction: `Contact` exposes no mutator for it, and the
//! directory keys its map by it.
//!
//! ## Validation
//!
//! Identifiers must be non-empty and at most 10 characters. Any character
//! content is accepted; only length is constrained.

use crate::limits::{validate_bounded, FieldError, MAX_CONTACT_ID_LEN};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique, immutable identifier for a contact
///
/// `ContactId` wraps the caller-supplied identifier string after validating
/// it. Once wrapped, the value is immutable; updating a contact never
/// changes its identifier.
///
/// ## Validation Rules
///
/// - Non-empty
/// - At most 10 characters (Unicode scalar values)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating the input
    ///
    /// # Errors
    ///
    /// Returns `FieldError` if the identifier is empty or longer than 10
    /// characters.
    pub fn new(id: impl Into<String>) -> Result<Self, FieldError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(ContactId(id))
    }

    /// Create a ContactId without validation
    ///
    /// The caller must ensure the identifier is valid. Use `new()` for
    /// untrusted input.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        ContactId(id.into())
    }

    /// Validate a candidate identifier
    pub fn validate(id: &str) -> Result<(), FieldError> {
        validate_bounded("contact ID", id, MAX_CONTACT_ID_LEN)
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a HashMap keyed by ContactId be probed with a plain &str.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactId {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactId::new(value)
    }
}

impl TryFrom<&str> for ContactId {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ContactId::new(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
