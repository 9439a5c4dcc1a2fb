// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for the Characters suites.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Missing required keys, empty values, and invalid
//! UTF-8 all fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for Characters suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEnv {
    /// Required base URL of the remote Characters service.
    BaseUrl,
    /// Required basic-auth login.
    Login,
    /// Required basic-auth password.
    Password,
    /// Optional request timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl ServiceEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "CHARACTERS_SERVICE_BASE_URL",
            Self::Login => "CHARACTERS_SERVICE_LOGIN",
            Self::Password => "CHARACTERS_SERVICE_PASSWORD",
            Self::TimeoutSeconds => "CHARACTERS_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed suite configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the remote Characters service.
    pub base_url: String,
    /// Basic-auth login for the service account.
    pub login: String,
    /// Basic-auth password for the service account.
    pub password: String,
    /// Optional request timeout override.
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a required key is unset, when any value is not
    /// valid UTF-8 or is empty, or when the timeout override is invalid.
    pub fn load() -> Result<Self, String> {
        let base_url = require_env(ServiceEnv::BaseUrl.as_str())?;
        let login = require_env(ServiceEnv::Login.as_str())?;
        let password = require_env(ServiceEnv::Password.as_str())?;
        let timeout = read_env_nonempty(ServiceEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(ServiceEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            base_url,
            login,
            password,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Reads a required environment variable, rejecting unset and empty values.
///
/// # Errors
///
/// Returns an error when the variable is unset, empty, or invalid UTF-8.
fn require_env(name: &str) -> Result<String, String> {
    read_env_nonempty(name)?.ok_or_else(|| format!("{name} must be set"))
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is non-numeric or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
