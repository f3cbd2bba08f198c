//! Core types for the rolodex contact directory
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactId: Unique, immutable identifier for a contact
//! - Contact: Validated record (identity, name, phone, address)
//! - FieldError: Per-field validation failures
//! - Error: Crate-wide error taxonomy
//! - limits: Field length bounds and validation helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod contact_id;
pub mod error;
pub mod limits;

// Re-export commonly used types
pub use contact::Contact;
pub use contact_id::ContactId;
pub use error::{Error, Result};
pub use limits::{
    FieldError, MAX_ADDRESS_LEN, MAX_CONTACT_ID_LEN, MAX_NAME_LEN, PHONE_LEN,
};
