//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! `session` owns authentication; `dashboard` holds derived library figures.

pub mod dashboard;
pub mod session;
