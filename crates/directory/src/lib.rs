//! Contact repository for rolodex
//!
//! This crate provides [`ContactDirectory`], the repository owning the
//! collection of contacts and mediating all access to it. Entity and error
//! types live in `rolodex-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directory;

pub use directory::ContactDirectory;
