//! Contact entity
//!
//! A `Contact` is a validated record: once constructed, every field
//! satisfies its constraint from the [`limits`](crate::limits) module, and
//! every mutator re-establishes that invariant atomically. A mutator either
//! commits the new value or fails and leaves the prior value untouched.

use crate::contact_id::ContactId;
use crate::limits::{
    validate_bounded, validate_exact, FieldError, MAX_ADDRESS_LEN, MAX_NAME_LEN, PHONE_LEN,
};
use serde::{Deserialize, Serialize};

/// A validated contact record
///
/// The identifier is immutable; the remaining four fields are mutable
/// through validating setters. Values are stored verbatim, never trimmed.
///
/// # Example
///
/// ```
/// use rolodex_core::Contact;
///
/// let mut contact = Contact::new("C-001", "John", "Doe", "5551234567", "123 Main Street")?;
/// assert_eq!(contact.first_name(), "John");
///
/// contact.set_phone("9876543210")?;
/// assert_eq!(contact.phone(), "9876543210");
/// # Ok::<(), rolodex_core::FieldError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl Contact {
    /// Create a new Contact, validating every field
    ///
    /// Fields are checked in order: identifier, first name, last name,
    /// phone, address. The first violated constraint fails the whole
    /// construction; no partially built contact is observable.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` for the first field that is empty, over its
    /// length bound, or (for phone) not exactly 10 characters.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let id = ContactId::new(id)?;
        let first_name = first_name.into();
        validate_bounded("first name", &first_name, MAX_NAME_LEN)?;
        let last_name = last_name.into();
        validate_bounded("last name", &last_name, MAX_NAME_LEN)?;
        let phone = phone.into();
        validate_exact("phone", &phone, PHONE_LEN)?;
        let address = address.into();
        validate_bounded("address", &address, MAX_ADDRESS_LEN)?;

        Ok(Contact {
            id,
            first_name,
            last_name,
            phone,
            address,
        })
    }

    // ========== Accessors ==========

    /// The immutable identifier
    #[inline]
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// First name
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number
    #[inline]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Address
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    // ========== Mutators (none for the identifier) ==========

    /// Set the first name (non-empty, at most 10 chars)
    ///
    /// # Errors
    ///
    /// Returns `FieldError` and leaves the prior value in place if the
    /// input is empty or too long.
    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        validate_bounded("first name", &value, MAX_NAME_LEN)?;
        self.first_name = value;
        Ok(())
    }

    /// Set the last name (non-empty, at most 10 chars)
    ///
    /// # Errors
    ///
    /// Returns `FieldError` and leaves the prior value in place if the
    /// input is empty or too long.
    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        validate_bounded("last name", &value, MAX_NAME_LEN)?;
        self.last_name = value;
        Ok(())
    }

    /// Set the phone number (exactly 10 chars)
    ///
    /// Only length is checked; character content is not. "555123456x"
    /// passes. Callers that need digit-only phones validate before calling.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` and leaves the prior value in place if the
    /// input is not exactly 10 characters.
    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        validate_exact("phone", &value, PHONE_LEN)?;
        self.phone = value;
        Ok(())
    }

    /// Set the address (non-empty, at most 30 chars)
    ///
    /// # Errors
    ///
    /// Returns `FieldError` and leaves the prior value in place if the
    /// input is empty or too long.
    pub fn set_address(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        validate_bounded("address", &value, MAX_ADDRESS_LEN)?;
        self.address = value;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
