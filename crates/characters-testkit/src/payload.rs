// crates/characters-testkit/src/payload.rs
// ============================================================================
// Module: Payload Shapes
// Description: Valid and intentionally malformed character payloads.
// Purpose: Build the three request shapes the suites send at the service.
// Dependencies: characters-client, serde, thiserror
// ============================================================================

//! ## Overview
//! Three payload shapes cover the suites' needs: a complete valid record, a
//! record missing the required `name` field, and a record carrying integers
//! in the service's string fields. The malformed shapes are distinct serde
//! types rather than loose JSON so their wire forms stay stable. Local
//! validation only guards what the builders themselves promise (a present,
//! non-blank name); service-side rules stay on the service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use characters_client::Character;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::random::random_alphanumeric;
use crate::random::random_decimal;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Local validation failures raised while building or checking payloads.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A complete payload was requested with a blank name.
    #[error("character name must not be empty")]
    MissingName,
    /// A listing body carried no `result` array.
    #[error("listing body has no result array")]
    MalformedListing,
    /// A listing record did not match the character schema.
    #[error("record {index} does not match the character schema: {source}")]
    InvalidRecord {
        /// Zero-based index of the offending record.
        index: usize,
        /// Underlying deserialization failure.
        source: serde_json::Error,
    },
}

// ============================================================================
// SECTION: Malformed Shapes
// ============================================================================

/// Character payload missing the required `name` field entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamelessCharacter {
    /// Education summary.
    pub education: String,
    /// Height value.
    pub height: f64,
    /// Identity note.
    pub identity: String,
    /// Alias list.
    pub other_aliases: String,
    /// Universe label.
    pub universe: String,
    /// Weight value.
    pub weight: f64,
}

/// Character payload carrying integers where the service expects strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MistypedCharacter {
    /// Integer in the string-typed education field.
    pub education: u64,
    /// Height value, still correctly typed.
    pub height: f64,
    /// Integer in the string-typed identity field.
    pub identity: u64,
    /// Valid name so only the field types are wrong.
    pub name: String,
    /// Integer in the string-typed alias field.
    pub other_aliases: u64,
    /// Integer in the string-typed universe field.
    pub universe: u64,
    /// Weight value, still correctly typed.
    pub weight: f64,
}

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Builds a complete valid character payload from explicit field values.
///
/// # Errors
///
/// Returns [`PayloadError::MissingName`] when the name is blank.
pub fn complete_character(
    education: &str,
    height: f64,
    identity: &str,
    name: &str,
    other_aliases: &str,
    universe: &str,
    weight: f64,
) -> Result<Character, PayloadError> {
    if name.trim().is_empty() {
        return Err(PayloadError::MissingName);
    }
    Ok(Character {
        education: Some(education.to_string()),
        height: Some(height),
        identity: Some(identity.to_string()),
        name: name.to_string(),
        other_aliases: Some(other_aliases.to_string()),
        universe: Some(universe.to_string()),
        weight: Some(weight),
    })
}

/// Builds a payload without the required `name` field.
#[must_use]
pub fn nameless_character(
    education: &str,
    height: f64,
    identity: &str,
    other_aliases: &str,
    universe: &str,
    weight: f64,
) -> NamelessCharacter {
    NamelessCharacter {
        education: education.to_string(),
        height,
        identity: identity.to_string(),
        other_aliases: other_aliases.to_string(),
        universe: universe.to_string(),
        weight,
    }
}

/// Builds a payload with integers in the service's string fields.
#[must_use]
pub fn mistyped_character(
    education: u64,
    height: f64,
    identity: u64,
    name: &str,
    other_aliases: u64,
    universe: u64,
    weight: f64,
) -> MistypedCharacter {
    MistypedCharacter {
        education,
        height,
        identity,
        name: name.to_string(),
        other_aliases,
        universe,
        weight,
    }
}

/// Builds a fully random valid character with a fresh ten-character name.
#[must_use]
pub fn random_character() -> Character {
    random_character_named(&random_alphanumeric(10))
}

/// Builds a fully random valid character under the given name.
#[must_use]
pub fn random_character_named(name: &str) -> Character {
    Character {
        education: Some(random_alphanumeric(10)),
        height: Some(random_decimal(1, 2)),
        identity: Some(random_alphanumeric(10)),
        name: name.to_string(),
        other_aliases: Some(random_alphanumeric(10)),
        universe: Some(random_alphanumeric(10)),
        weight: Some(random_decimal(2, 1)),
    }
}

// ============================================================================
// SECTION: Listing Validation
// ============================================================================

/// Checks every record of a listing body against the character schema.
///
/// Accepts the decoded JSON of a `GET /characters` response and returns the
/// number of records on success.
///
/// # Errors
///
/// Returns [`PayloadError::MalformedListing`] when the body carries no
/// `result` array and [`PayloadError::InvalidRecord`] for the first record
/// that does not deserialize as a character.
pub fn validate_character_listing(body: &Value) -> Result<usize, PayloadError> {
    let records = body
        .get("result")
        .and_then(Value::as_array)
        .ok_or(PayloadError::MalformedListing)?;
    for (index, record) in records.iter().enumerate() {
        serde_json::from_value::<Character>(record.clone()).map_err(|source| {
            PayloadError::InvalidRecord {
                index,
                source,
            }
        })?;
    }
    Ok(records.len())
}
