//! Auth-session state for the current staff member.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "is someone logged in".
//! Route guards and the navigation shell only observe it through a read-only
//! `Signal<Session>`; the auth actions are the only writers.
//!
//! TRADE-OFFS
//! ==========
//! The in-memory session is authoritative. The durable copy in
//! `localStorage` only exists to survive reloads, so storage failures are
//! logged and otherwise ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::error::StorageError;

/// Snapshot of authentication state.
///
/// Fields are private so token and logged-in status can only change together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    is_authenticating: bool,
}

impl Session {
    /// Process-start state: the persisted token has not been read yet.
    pub fn restoring() -> Self {
        Self { token: None, is_authenticating: true }
    }

    pub fn signed_out() -> Self {
        Self { token: None, is_authenticating: false }
    }

    pub fn signed_in(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), is_authenticating: false }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.is_authenticating
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::restoring()
    }
}

/// Durable key-value surface that survives reloads.
pub trait TokenStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the write is rejected (quota, privacy mode).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be reached.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Outside the `csr` build every call reports
/// `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStorage for LocalTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage for non-browser builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    entries: HashMap<String, String>,
}

impl MemoryTokenStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Session state plus its durable copy.
#[derive(Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
    key: String,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Create a store in the restoring state. Call `initialize` before any
    /// route decision is expected to resolve.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { session: Session::restoring(), storage, key: key.into() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Restore a previously persisted token.
    ///
    /// Never fails: a missing, empty, or unreadable token means "not logged in".
    /// Only the first call does anything.
    pub fn initialize(&mut self) {
        if !self.session.is_authenticating {
            log::debug!("session: initialize skipped, already restored");
            return;
        }
        let token = match self.storage.get(&self.key) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                log::warn!("session: restore skipped: {e}");
                None
            }
        };
        self.session = Session { token, is_authenticating: false };
        log::info!("session: restored (logged_in={})", self.session.is_logged_in());
    }

    /// Start a session with `token` and persist it.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.session = Session::signed_in(token.clone());
        if let Err(e) = self.storage.set(&self.key, &token) {
            log::warn!("session: token not persisted: {e}");
        }
        log::info!("session: logged in");
    }

    /// End the session and evict the durable copy. Idempotent.
    ///
    /// Returns the token that was active, if any, for server-side revocation.
    pub fn logout(&mut self) -> Option<String> {
        let previous = self.session.token.take();
        self.session = Session::signed_out();
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("session: token not evicted: {e}");
        }
        if previous.is_some() {
            log::info!("session: logged out");
        } else {
            log::debug!("session: logout without active session");
        }
        previous
    }
}

/// Reactive handle over the browser session store.
///
/// Passed explicitly to the components that need it; readers should take
/// `reader()` instead so they cannot mutate.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: RwSignal<SessionStore<LocalTokenStorage>>,
}

impl SessionHandle {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(LocalTokenStorage, config.token_storage_key)),
        }
    }

    pub fn initialize(self) {
        self.store.update(SessionStore::initialize);
    }

    pub fn login(self, token: String) {
        self.store.update(|store| store.login(token));
    }

    pub fn logout(self) -> Option<String> {
        self.store.try_update(SessionStore::logout).flatten()
    }

    /// Current bearer token without subscribing to changes.
    pub fn token_untracked(self) -> Option<String> {
        self.store
            .with_untracked(|store| store.session().token().map(str::to_owned))
    }

    /// Read-only view for guards and navigation.
    pub fn reader(self) -> Signal<Session> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.session().clone()))
    }
}
