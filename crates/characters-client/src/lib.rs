// crates/characters-client/src/lib.rs
// ============================================================================
// Module: Characters Client Library
// Description: Typed HTTP wrapper for the remote Characters REST service.
// Purpose: Provide request construction, the wire model, and the message catalog.
// Dependencies: reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! This crate wraps the externally hosted Characters REST service behind a
//! small typed client. The service itself is a black box: the client builds
//! requests, optionally attaches basic-auth credentials, and hands back the
//! raw exchange for callers to assert on. No retries, no error translation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
mod client;
mod error;
pub mod model;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiResponse;
pub use client::CharactersClient;
pub use client::Credentials;
pub use error::ClientError;
pub use model::Character;
pub use model::CharacterEnvelope;
pub use model::CharacterListEnvelope;
