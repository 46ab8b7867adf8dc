//! Networking modules for the library REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles identity and dashboard calls, `types` defines the wire
//! schema.

pub mod api;
pub mod types;
