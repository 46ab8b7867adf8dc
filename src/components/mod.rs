//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components receive the session as an explicit `Signal<Session>` prop;
//! none of them can write it.

pub mod month_calendar;
pub mod navbar;
pub mod route_guard;
pub mod sidebar;
