//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and date logic lives here so pages and components stay thin
//! and the logic is testable without a browser.

pub mod calendar;
pub mod due_dates;
pub mod guard;
