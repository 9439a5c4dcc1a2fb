// crates/characters-client/src/catalog.rs
// ============================================================================
// Module: Service Message Catalog
// Description: Stable error-message substrings and limits of the remote service.
// Purpose: Centralize the strings and bounds that suites assert against.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The remote service reports failures as 4xx responses with textual bodies.
//! Tests assert that a body contains one of the catalog substrings rather
//! than matching whole bodies, since the service wraps messages per field.
//! The limits here were observed from service behavior; the service remains
//! the authority on them.

use std::fmt;

// ============================================================================
// SECTION: Service Limits
// ============================================================================

/// Maximum accepted length for any string field.
pub const STRING_FIELD_MAX_CHARS: usize = 350;
/// Maximum number of records the remote collection accepts.
pub const COLLECTION_CAPACITY: usize = 500;
/// Number of records the collection holds after a reset.
pub const DEFAULT_COLLECTION_LEN: usize = 302;

// ============================================================================
// SECTION: Message Catalog
// ============================================================================

/// Known error-message substrings returned by the remote service.
///
/// # Invariants
/// - Variants are stable for assertion labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMessage {
    /// Request carried no or wrong credentials.
    Unauthorized,
    /// The referenced character name does not exist.
    NoSuchName,
    /// A required field was absent from the payload.
    MissingRequiredField,
    /// The character name is already taken.
    AlreadyExists,
    /// A numeric field carried a non-numeric value.
    NotAValidNumber,
    /// A string field carried a non-string value.
    NotAValidString,
    /// A string field exceeded the service length bound.
    FieldLength,
    /// The collection is at capacity.
    CollectionFull,
}

impl ServiceMessage {
    /// Returns the stable substring the service embeds in its error body.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "You have to login with proper credentials",
            Self::NoSuchName => "No such name",
            Self::MissingRequiredField => "Missing data for required field.",
            Self::AlreadyExists => "is already exists",
            Self::NotAValidNumber => "Not a valid number.",
            Self::NotAValidString => "Not a valid string.",
            Self::FieldLength => "Length must be between 1 and 350.",
            Self::CollectionFull => "Collection can't contain more than 500 items",
        }
    }
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
