//! Comprehensive public-API tests for rolodex
//!
//! Exercises the full surface through the facade crate, the way an
//! embedding caller would use it.

mod contact_tests;

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole suite
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// Valid fixture data shared across the suite
pub const VALID_ID: &str = "1234567890";
pub const VALID_FIRST_NAME: &str = "John";
pub const VALID_LAST_NAME: &str = "Doe";
pub const VALID_PHONE: &str = "5551234567";
pub const VALID_ADDRESS: &str = "123 Main Street";

pub fn valid_contact() -> rolodex::Contact {
    rolodex::Contact::new(
        VALID_ID,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    )
    .unwrap()
}

pub fn valid_contact_with_id(id: &str) -> rolodex::Contact {
    rolodex::Contact::new(
        id,
        VALID_FIRST_NAME,
        VALID_LAST_NAME,
        VALID_PHONE,
        VALID_ADDRESS,
    )
    .unwrap()
}
