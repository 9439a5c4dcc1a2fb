// system-tests/src/lib.rs
// ============================================================================
// Module: Characters System Tests Library
// Description: Shared configuration for the Characters black-box suites.
// Purpose: Provide environment-backed settings for system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration used by the
//! Characters system-test binaries in `system-tests/tests`. The remote
//! service under test is external; everything here is suite plumbing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
