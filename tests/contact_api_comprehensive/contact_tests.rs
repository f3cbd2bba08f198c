//! Contact entity tests through the public API
//!
//! Coverage mirrors the entity contract: valid construction round-trips
//! inputs verbatim, every boundary is exercised at the limit and one past
//! it, and failed mutation is observable as a no-op.

use crate::{valid_contact, VALID_ADDRESS, VALID_FIRST_NAME, VALID_ID, VALID_LAST_NAME, VALID_PHONE};
use rolodex::{Contact, FieldError};

// ==================== Creation ====================

#[test]
fn creation_with_valid_data_succeeds() {
    let contact = valid_contact();
    assert_eq!(contact.id().as_str(), VALID_ID);
    assert_eq!(contact.first_name(), VALID_FIRST_NAME);
    assert_eq!(contact.last_name(), VALID_LAST_NAME);
    assert_eq!(contact.phone(), VALID_PHONE);
    assert_eq!(contact.address(), VALID_ADDRESS);
}

#[test]
fn accessors_are_idempotent() {
    let contact = valid_contact();
    assert_eq!(contact.id().as_str(), contact.id().as_str());
    assert_eq!(contact.first_name(), contact.first_name());
    assert_eq!(contact.last_name(), contact.last_name());
    assert_eq!(contact.phone(), contact.phone());
    assert_eq!(contact.address(), contact.address());
}

// ==================== Contact ID ====================

#[test]
fn id_cannot_be_empty() {
    let result = Contact::new("", VALID_FIRST_NAME, VALID_LAST_NAME, VALID_PHONE, VALID_ADDRESS);
    assert!(matches!(result, Err(FieldError::Empty { .. })));
}

#[test]
fn id_cannot_exceed_ten_chars() {
    let result = Contact::new(
        "12345678901",
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    );
    assert!(matches!(result, Err(FieldError::TooLong { .. })));
}

#[test]
fn id_with_exactly_ten_chars_is_valid() {
    let contact = Contact::new(
        "1234567890",
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    )
    .unwrap();
    assert_eq!(contact.id().as_str(), "1234567890");
}

// ==================== First Name ====================

#[test]
fn first_name_cannot_be_empty() {
    let result = Contact::new(VALID_ID, "", VALID_LAST_NAME, VALID_PHONE, VALID_ADDRESS);
    assert!(matches!(result, Err(FieldError::Empty { .. })));
}

#[test]
fn first_name_cannot_exceed_ten_chars() {
    let result = Contact::new(
        VALID_ID,
        "Bartholomew",
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    );
    assert!(matches!(result, Err(FieldError::TooLong { .. })));
}

#[test]
fn first_name_with_exactly_ten_chars_is_valid() {
    let contact = Contact::new(
        VALID_ID,
        "Maximilian",
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    )
    .unwrap();
    assert_eq!(contact.first_name(), "Maximilian");
}

#[test]
fn first_name_updates_with_valid_value() {
    let mut contact = valid_contact();
    contact.set_first_name("Jane").unwrap();
    assert_eq!(contact.first_name(), "Jane");
}

#[test]
fn first_name_update_rejects_empty() {
    let mut contact = valid_contact();
    assert!(contact.set_first_name("").is_err());
    assert_eq!(contact.first_name(), VALID_FIRST_NAME);
}

// ==================== Last Name ====================

#[test]
fn last_name_cannot_be_empty() {
    let result = Contact::new(VALID_ID, VALID_FIRST_NAME, "", VALID_PHONE, VALID_ADDRESS);
    assert!(matches!(result, Err(FieldError::Empty { .. })));
}

#[test]
fn last_name_cannot_exceed_ten_chars() {
    let result = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        "Wolfeschleg",
        VALID_PHONE,
        VALID_ADDRESS,
    );
    assert!(matches!(result, Err(FieldError::TooLong { .. })));
}

#[test]
fn last_name_with_exactly_ten_chars_is_valid() {
    let contact = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        "Fitzgerald",
        VALID_PHONE,
        VALID_ADDRESS,
    )
    .unwrap();
    assert_eq!(contact.last_name(), "Fitzgerald");
}

#[test]
fn last_name_updates_with_valid_value() {
    let mut contact = valid_contact();
    contact.set_last_name("Smith").unwrap();
    assert_eq!(contact.last_name(), "Smith");
}

// ==================== Phone ====================

#[test]
fn phone_must_be_exactly_ten_chars() {
    let nine = Contact::new(VALID_ID, VALID_FIRST_NAME, VALID_LAST_NAME, "555123456", VALID_ADDRESS);
    assert!(matches!(nine, Err(FieldError::WrongLength { .. })));

    let eleven = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        "55512345678",
        VALID_ADDRESS,
    );
    assert!(matches!(eleven, Err(FieldError::WrongLength { .. })));

    let ten = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        "5551234567",
        VALID_ADDRESS,
    );
    assert!(ten.is_ok());
}

#[test]
fn phone_content_is_not_checked() {
    // Length-only contract, preserved deliberately
    let contact = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        "abcdefghij",
        VALID_ADDRESS,
    )
    .unwrap();
    assert_eq!(contact.phone(), "abcdefghij");
}

#[test]
fn phone_updates_with_valid_value() {
    let mut contact = valid_contact();
    contact.set_phone("9876543210").unwrap();
    assert_eq!(contact.phone(), "9876543210");
}

#[test]
fn phone_update_rejects_wrong_length() {
    let mut contact = valid_contact();
    assert!(contact.set_phone("12345").is_err());
    assert_eq!(contact.phone(), VALID_PHONE);
}

// ==================== Address ====================

#[test]
fn address_cannot_be_empty() {
    let result = Contact::new(VALID_ID, VALID_FIRST_NAME, VALID_LAST_NAME, VALID_PHONE, "");
    assert!(matches!(result, Err(FieldError::Empty { .. })));
}

#[test]
fn address_cannot_exceed_thirty_chars() {
    let result = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        "x".repeat(31),
    );
    assert!(matches!(result, Err(FieldError::TooLong { .. })));
}

#[test]
fn address_with_exactly_thirty_chars_is_valid() {
    let address = "x".repeat(30);
    let contact = Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        &address,
    )
    .unwrap();
    assert_eq!(contact.address(), address);
}

#[test]
fn address_updates_with_valid_value() {
    let mut contact = valid_contact();
    contact.set_address("456 Oak Avenue").unwrap();
    assert_eq!(contact.address(), "456 Oak Avenue");
}
