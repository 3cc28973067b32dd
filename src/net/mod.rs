//! Networking modules for the scoring-service HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two calls the page makes, `types` defines the wire schema
//! shared with the external scoring service.

pub mod api;
pub mod types;
