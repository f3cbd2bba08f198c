//! ContactDirectory: the contact repository
//!
//! ## Design
//!
//! The directory owns a `HashMap<ContactId, Contact>` outright. Every
//! contact in the map is reachable only through the directory, and the map
//! key always equals the stored contact's identifier.
//!
//! ## Ownership
//!
//! Mutation takes `&mut self`, so the borrow checker enforces the
//! one-logical-caller contract. Embedders that need sharing wrap the
//! directory in their own synchronization; none is built in.
//!
//! ## API
//!
//! - **Lifecycle**: `add_contact`, `delete_contact`
//! - **Field updates**: `update_first_name`, `update_last_name`,
//!   `update_phone`, `update_address`
//! - **Lookup**: `get_contact`, `contains`
//!
//! Lookup by exact identifier only; there is no iteration or
//! search-by-field surface.

use std::collections::HashMap;

use rolodex_core::{Contact, ContactId, Error, Result};
use tracing::debug;

/// Repository of contacts keyed by identifier
///
/// An explicitly constructed instance with no global state; independent
/// directories coexist freely.
///
/// # Example
///
/// ```
/// use rolodex_core::Contact;
/// use rolodex_directory::ContactDirectory;
///
/// let mut directory = ContactDirectory::new();
/// let contact = Contact::new("C-001", "John", "Doe", "5551234567", "123 Main Street")?;
/// directory.add_contact(contact)?;
///
/// directory.update_phone("C-001", "9876543210")?;
/// assert_eq!(directory.get_contact("C-001").unwrap().phone(), "9876543210");
///
/// directory.delete_contact("C-001")?;
/// assert!(directory.get_contact("C-001").is_none());
/// # Ok::<(), rolodex_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: HashMap<ContactId, Contact>,
}

impl ContactDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
        }
    }

    /// Add a contact to the directory
    ///
    /// On success the directory owns the contact; all further access goes
    /// through the directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if a contact with the same identifier
    /// is already present. The stored contact is untouched.
    pub fn add_contact(&mut self, contact: Contact) -> Result<()> {
        if self.contacts.contains_key(contact.id().as_str()) {
            return Err(Error::duplicate(contact.id().clone()));
        }
        debug!(target: "rolodex::directory", id = %contact.id(), "Contact added");
        self.contacts.insert(contact.id().clone(), contact);
        Ok(())
    }

    /// Delete a contact by identifier, returning the removed contact
    ///
    /// The directory retains no reference to the removed contact.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no contact with that identifier exists.
    pub fn delete_contact(&mut self, id: &str) -> Result<Contact> {
        match self.contacts.remove(id) {
            Some(contact) => {
                debug!(target: "rolodex::directory", id, "Contact deleted");
                Ok(contact)
            }
            None => Err(Error::not_found(id)),
        }
    }

    /// Update a contact's first name
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the identifier is absent, or
    /// `Error::Validation` if the value violates the field constraint; in
    /// either case the stored contact is unchanged.
    pub fn update_first_name(&mut self, id: &str, value: &str) -> Result<()> {
        self.contact_mut(id)?.set_first_name(value)?;
        debug!(target: "rolodex::directory", id, field = "first_name", "Contact updated");
        Ok(())
    }

    /// Update a contact's last name
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the identifier is absent, or
    /// `Error::Validation` if the value violates the field constraint; in
    /// either case the stored contact is unchanged.
    pub fn update_last_name(&mut self, id: &str, value: &str) -> Result<()> {
        self.contact_mut(id)?.set_last_name(value)?;
        debug!(target: "rolodex::directory", id, field = "last_name", "Contact updated");
        Ok(())
    }

    /// Update a contact's phone number
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the identifier is absent, or
    /// `Error::Validation` if the value is not exactly 10 characters; in
    /// either case the stored contact is unchanged.
    pub fn update_phone(&mut self, id: &str, value: &str) -> Result<()> {
        self.contact_mut(id)?.set_phone(value)?;
        debug!(target: "rolodex::directory", id, field = "phone", "Contact updated");
        Ok(())
    }

    /// Update a contact's address
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the identifier is absent, or
    /// `Error::Validation` if the value violates the field constraint; in
    /// either case the stored contact is unchanged.
    pub fn update_address(&mut self, id: &str, value: &str) -> Result<()> {
        self.contact_mut(id)?.set_address(value)?;
        debug!(target: "rolodex::directory", id, field = "address", "Contact updated");
        Ok(())
    }

    /// Get a contact by identifier
    ///
    /// Absent is a normal outcome here, not an error. The returned borrow
    /// is read-only; mutation goes through the `update_*` operations, so
    /// the validation path cannot be bypassed.
    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Whether a contact with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    /// Number of contacts in the directory
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact for mutation, failing if absent
    fn contact_mut(&mut self, id: &str) -> Result<&mut Contact> {
        self.contacts
            .get_mut(id)
            .ok_or_else(|| Error::not_found(id))
    }
}
