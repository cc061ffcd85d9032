//! Networking modules for the identity service and the volunteer REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` wraps the external authentication capability, `api` handles the
//! volunteer backend calls, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
