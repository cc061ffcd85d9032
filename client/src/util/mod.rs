//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guard and redirect-target helpers used by the login and
//! add-volunteer-post pages.

pub mod auth;
