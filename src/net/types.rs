//! Wire DTOs for the identity endpoint and the dashboard reads.
//!
//! DESIGN
//! ======
//! Optional nested fields are resolved here with named defaults so pages
//! never branch on deep optionals.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title shown when an issue record carries no book details.
pub const UNTITLED_BOOK: &str = "Book";
/// Name shown when an issue record carries no reader details.
pub const UNKNOWN_READER: &str = "Reader";
/// Role assigned to accounts created from the sign-up page.
pub const SIGN_UP_ROLE: &str = "staff";

/// Login form payload. Exists only for the duration of one attempt.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub access_token: String,
    #[serde(rename = "_id", default)]
    pub id: String,
}

/// `POST /auth/signUp` payload.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Successful `POST /auth/signUp` body. An empty `id` means the account was
/// not created.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// `{ "message": ... }` body of logout replies and rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Catalog entry; only the fields the dashboard reads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Reader {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum IssueStatus {
    Returned,
    #[serde(rename = "Not Returned")]
    NotReturned,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BookSummary {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReaderSummary {
    #[serde(default)]
    pub name: Option<String>,
}

/// A loan record from `GET /issuebook`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBook {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub book: Option<BookSummary>,
    #[serde(default)]
    pub reader: Option<ReaderSummary>,
}

impl IssuedBook {
    /// Book title, or `UNTITLED_BOOK` when missing or blank.
    pub fn book_title(&self) -> &str {
        self.book
            .as_ref()
            .and_then(|b| b.title.as_deref())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED_BOOK)
    }

    /// Reader name, or `UNKNOWN_READER` when missing or blank.
    pub fn reader_name(&self) -> &str {
        self.reader
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNKNOWN_READER)
    }
}

/// `GET /issuebook` answers either a bare array or `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IssuedBooksPayload {
    Bare(Vec<IssuedBook>),
    Wrapped {
        #[serde(default)]
        data: Vec<IssuedBook>,
    },
}

impl IssuedBooksPayload {
    pub fn into_vec(self) -> Vec<IssuedBook> {
        match self {
            Self::Bare(data) | Self::Wrapped { data } => data,
        }
    }
}
