//! Login and logout actions: the only code path that writes the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these with a `CredentialService` and a commit callback that
//! applies the result to the session store. Failures end here as values the
//! page turns into messages; the route guard only ever sees a consistent
//! session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::AuthError;
use crate::net::api::CredentialService;
use crate::net::types::Credentials;

/// Authenticate and hand the token to `commit` before returning.
///
/// `commit` runs exactly once on success and never on failure, so the token
/// is in the session before the caller navigates to a protected route.
///
/// # Errors
///
/// Propagates the credential service failure unchanged.
pub async fn sign_in<C, F>(service: &C, credentials: &Credentials, commit: F) -> Result<(), AuthError>
where
    C: CredentialService,
    F: FnOnce(String),
{
    match service.authenticate(credentials).await {
        Ok(token) => {
            commit(token);
            Ok(())
        }
        Err(e) => {
            log::info!("auth: login rejected: {e}");
            Err(e)
        }
    }
}

/// Ask the server to invalidate a token that was already dropped locally.
pub async fn revoke<C: CredentialService>(service: &C, token: Option<String>) {
    let Some(token) = token else {
        return;
    };
    if let Err(e) = service.deauthenticate(&token).await {
        log::warn!("auth: server-side logout failed: {e}");
    }
}
