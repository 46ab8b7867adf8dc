//! Error taxonomy for auth, token storage, and read-only API fetches.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures stop at the login action and become form messages. Storage
//! failures never surface to the user: the in-memory session stays
//! authoritative and the durable copy is best effort.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure from the identity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("identity service responded with status {0}")]
    Server(u16),
    #[error("malformed identity response: missing {0}")]
    MissingField(&'static str),
    /// Non-2xx response that carried a `message` for the user.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl AuthError {
    /// Message shown under the login or sign-up form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password.",
            Self::Network(_) => "Could not reach the library service. Please try again.",
            Self::Server(_) | Self::MissingField(_) | Self::Rejected(_) => {
                "The library service is having trouble. Please try again."
            }
        }
    }
}

/// Failure from the durable token store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Failure fetching dashboard data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}
