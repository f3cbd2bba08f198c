//! Rolodex - validated in-memory contact directory
//!
//! Rolodex stores contact records (identifier, name, phone, address) keyed
//! by a unique identifier, enforcing field-level validation on construction
//! and on every update.
//!
//! # Quick Start
//!
//! ```
//! use rolodex::{Contact, ContactDirectory};
//!
//! let mut directory = ContactDirectory::new();
//!
//! // Construction validates every field
//! let contact = Contact::new("C-001", "John", "Doe", "5551234567", "123 Main Street")?;
//! directory.add_contact(contact)?;
//!
//! // Updates route through the directory and re-validate
//! directory.update_phone("C-001", "9876543210")?;
//! assert_eq!(directory.get_contact("C-001").unwrap().phone(), "9876543210");
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! # Architecture
//!
//! Entity and error types live in `rolodex-core`; the repository lives in
//! `rolodex-directory`. This crate re-exports both as the public API.

pub use rolodex_core::*;
pub use rolodex_directory::*;
