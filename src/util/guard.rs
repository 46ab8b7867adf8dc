//! Navigation gate for protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route goes through `decide`, so redirect behavior is identical for
//! all protected pages. The decision reads only the session snapshot and the
//! static route class; it keeps no state of its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{LOGIN_PATH, RouteAccess};
use crate::state::session::Session;

/// Outcome of a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Token restoration still pending; render a neutral indicator.
    Loading,
    Allow,
    Redirect(&'static str),
}

/// Decide whether a route with `access` may render for `session`.
pub fn decide(access: RouteAccess, session: &Session) -> GuardDecision {
    if session.is_authenticating() {
        return GuardDecision::Loading;
    }
    match access {
        RouteAccess::Public => GuardDecision::Allow,
        RouteAccess::Protected if session.is_logged_in() => GuardDecision::Allow,
        RouteAccess::Protected => GuardDecision::Redirect(LOGIN_PATH),
    }
}
