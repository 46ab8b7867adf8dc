//! REST helpers for the identity endpoint and dashboard reads.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: calls fail with a network error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Identity failures are classified into `AuthError` so the login action can
//! map them to form messages. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ConsoleConfig;
use crate::error::{ApiError, AuthError};
#[cfg(any(test, feature = "csr"))]
use crate::net::types::{LoginResponse, MessageResponse};
use crate::net::types::{Book, Credentials, IssuedBook, Reader, SignUpRequest, SignUpResponse};

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

/// Identity endpoint contract the session core depends on.
#[allow(async_fn_in_trait)]
pub trait CredentialService {
    /// Exchange credentials for an opaque bearer token.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for a wrong email/password, `Network` when the
    /// endpoint is unreachable.
    async fn authenticate(&self, credentials: &Credentials) -> Result<String, AuthError>;

    /// Best-effort server-side invalidation of `token`.
    ///
    /// # Errors
    ///
    /// Returns the failure for logging; callers never block logout on it.
    async fn deauthenticate(&self, token: &str) -> Result<(), AuthError>;

    /// Register a new staff account.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` if the service rejects or cannot be reached.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError>;
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a non-2xx identity response.
#[cfg(any(test, feature = "csr"))]
fn auth_status_error(status: u16) -> AuthError {
    match status {
        400 | 401 | 403 | 404 => AuthError::InvalidCredentials,
        _ => AuthError::Server(status),
    }
}

#[cfg(any(test, feature = "csr"))]
fn token_from_login(body: LoginResponse) -> Result<String, AuthError> {
    if body.access_token.trim().is_empty() {
        return Err(AuthError::MissingField("accessToken"));
    }
    Ok(body.access_token)
}

/// Classify a non-2xx sign-up response, keeping the server's message.
#[cfg(any(test, feature = "csr"))]
fn sign_up_status_error(status: u16, body: Option<MessageResponse>) -> AuthError {
    match body.map(|b| b.message.trim().to_owned()) {
        Some(message) if !message.is_empty() => AuthError::Rejected(message),
        _ => AuthError::Server(status),
    }
}

#[cfg(any(test, feature = "csr"))]
fn check_sign_up(body: SignUpResponse) -> Result<SignUpResponse, AuthError> {
    if body.id.is_empty() {
        return Err(AuthError::MissingField("_id"));
    }
    Ok(body)
}

/// `CredentialService` backed by the library REST API.
#[derive(Clone, Copy, Debug)]
pub struct HttpCredentialService {
    config: ConsoleConfig,
}

impl HttpCredentialService {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }
}

impl CredentialService for HttpCredentialService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<String, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("auth/login"))
                .json(credentials)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(auth_status_error(resp.status()));
            }
            let body: LoginResponse = resp.json().await.map_err(|e| AuthError::Network(e.to_string()))?;
            token_from_login(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &self.config);
            Err(AuthError::Network(NOT_IN_BROWSER.to_owned()))
        }
    }

    async fn deauthenticate(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("auth/logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Server(resp.status()));
            }
            if let Ok(body) = resp.json::<MessageResponse>().await {
                log::debug!("api: logout acknowledged: {}", body.message);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(AuthError::Network(NOT_IN_BROWSER.to_owned()))
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("auth/signUp"))
                .json(request)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.json::<MessageResponse>().await.ok();
                return Err(sign_up_status_error(status, body));
            }
            let body: SignUpResponse = resp.json().await.map_err(|e| AuthError::Network(e.to_string()))?;
            check_sign_up(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(AuthError::Network(NOT_IN_BROWSER.to_owned()))
        }
    }
}

/// Everything the dashboard renders, fetched in one go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardData {
    pub books: Vec<Book>,
    pub readers: Vec<Reader>,
    pub issued: Vec<IssuedBook>,
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch books, readers and issue records concurrently.
///
/// # Errors
///
/// Fails as a whole if any of the three requests fails.
pub async fn fetch_dashboard(config: ConsoleConfig, token: &str) -> Result<DashboardData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let books_url = config.endpoint("book");
        let readers_url = config.endpoint("reader");
        let issued_url = config.endpoint("issuebook");
        let (books, readers, issued) = futures::try_join!(
            get_json::<Vec<Book>>(&books_url, token),
            get_json::<Vec<Reader>>(&readers_url, token),
            get_json::<crate::net::types::IssuedBooksPayload>(&issued_url, token),
        )?;
        Ok(DashboardData { books, readers, issued: issued.into_vec() })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token);
        Err(ApiError::Network(NOT_IN_BROWSER.to_owned()))
    }
}
