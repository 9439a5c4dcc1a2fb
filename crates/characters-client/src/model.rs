// crates/characters-client/src/model.rs
// ============================================================================
// Module: Characters Wire Model
// Description: Character record and response envelopes for the remote service.
// Purpose: Provide serde types matching the service's JSON wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The remote service models a single entity: a named fictional persona with
//! optional biographical fields. Only `name` is required; uniqueness within
//! the remote collection is enforced server-side, not here. Successful
//! responses wrap their payload in a `result` envelope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Character Record
// ============================================================================

/// One character record as the service represents it on the wire.
///
/// # Invariants
/// - `name` is always present; all other fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Education summary, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Height in service-defined units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Secret or public identity note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Unique character name within the remote collection.
    pub name: String,
    /// Alternative aliases, comma-separated by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_aliases: Option<String>,
    /// Universe the character belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
    /// Weight in service-defined units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

// ============================================================================
// SECTION: Response Envelopes
// ============================================================================

/// Envelope for single-record responses (`GET /character`, `POST`, `PUT`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterEnvelope {
    /// The affected character record.
    pub result: Character,
}

/// Envelope for the listing response (`GET /characters`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterListEnvelope {
    /// Every record currently held by the remote collection.
    pub result: Vec<Character>,
}
