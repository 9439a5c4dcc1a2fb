// crates/characters-client/src/client.rs
// ============================================================================
// Module: Characters HTTP Client
// Description: Request construction for the Characters REST endpoints.
// Purpose: Issue CRUD, listing, and reset calls with optional basic auth.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! One method per REST action. Every method returns the raw exchange
//! ([`ApiResponse`]) so suites can assert on status codes and body text
//! directly; the client never retries and never maps remote errors. Bodies
//! are generic over [`serde::Serialize`] so intentionally malformed fixture
//! payloads pass through unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Credentials
// ============================================================================

/// Basic-auth credential pair for the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account login, typically an email address.
    login: String,
    /// Account password.
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

// ============================================================================
// SECTION: Raw Response
// ============================================================================

/// Raw outcome of one HTTP exchange with the remote service.
///
/// # Invariants
/// - `body` holds the full response text, error bodies included.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    status: StatusCode,
    /// Full response body text.
    body: String,
}

impl ApiResponse {
    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the response body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not valid JSON for
    /// the requested type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|source| ClientError::Decode {
            context: "response body",
            source,
        })
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the remote Characters service.
#[derive(Debug, Clone)]
pub struct CharactersClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Underlying HTTP client with the configured timeout.
    http: Client,
    /// Credentials attached to every request when present.
    credentials: Option<Credentials>,
}

impl CharactersClient {
    /// Creates a client for the given base URL with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] when the base URL does not parse and
    /// [`ClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ClientError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: trimmed.to_string(),
            http,
            credentials: None,
        })
    }

    /// Attaches basic-auth credentials to every subsequent request.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Drops any attached credentials, producing an anonymous client.
    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists every character in the remote collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn list_characters(&self) -> Result<ApiResponse, ClientError> {
        self.dispatch(self.http.get(self.endpoint("characters"))).await
    }

    /// Fetches a single character by name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn get_character(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let request = self.http.get(self.endpoint("character")).query(&[("name", name)]);
        self.dispatch(request).await
    }

    /// Creates a character from the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn create_character<T: Serialize>(
        &self,
        character: &T,
    ) -> Result<ApiResponse, ClientError> {
        self.dispatch(self.http.post(self.endpoint("character")).json(character)).await
    }

    /// Updates an existing character from the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn update_character<T: Serialize>(
        &self,
        character: &T,
    ) -> Result<ApiResponse, ClientError> {
        self.dispatch(self.http.put(self.endpoint("character")).json(character)).await
    }

    /// Deletes a character by name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn delete_character(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let request = self.http.delete(self.endpoint("character")).query(&[("name", name)]);
        self.dispatch(request).await
    }

    /// Resets the remote collection to its default contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on local transport failures only.
    pub async fn reset_collection(&self) -> Result<ApiResponse, ClientError> {
        self.dispatch(self.http.post(self.endpoint("reset"))).await
    }

    /// Builds the absolute URL for an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Attaches credentials when present, sends, and collects the exchange.
    async fn dispatch(&self, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        let request = match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.login, Some(&credentials.password))
            }
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse {
            status,
            body,
        })
    }
}
