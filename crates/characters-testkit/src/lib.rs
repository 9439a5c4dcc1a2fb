// crates/characters-testkit/src/lib.rs
// ============================================================================
// Module: Characters Testkit Library
// Description: Randomized fixture data for the Characters black-box suites.
// Purpose: Provide generators and payload shapes for valid and malformed requests.
// Dependencies: characters-client, rand, serde, thiserror
// ============================================================================

//! ## Overview
//! Fixture builders for the Characters suites. Generators produce
//! schema-shaped payloads in three variants: complete and valid, missing the
//! required `name` field, and carrying wrong field types. Randomness comes
//! from [`rand`] and is not cryptographically secure; it only needs to keep
//! fixture names from colliding across runs.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod payload;
mod random;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use payload::MistypedCharacter;
pub use payload::NamelessCharacter;
pub use payload::PayloadError;
pub use payload::complete_character;
pub use payload::mistyped_character;
pub use payload::nameless_character;
pub use payload::random_character;
pub use payload::random_character_named;
pub use payload::validate_character_listing;
pub use random::random_alphanumeric;
pub use random::random_decimal;
pub use random::random_decimal_text;
pub use random::random_integer;
