//! Build-time endpoint configuration for the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! WASM code has no process environment at runtime, so endpoints are baked in
//! at compile time from `VOLUNTEERHUB_API_BASE` / `VOLUNTEERHUB_IDENTITY_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://assignment-11-server-woad-one.vercel.app";
pub const DEFAULT_IDENTITY_BASE: &str = "/identity";

/// Base URLs for the two remote collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Volunteer REST API (`/jwt`, `/api/add_volunteer_post`).
    pub api_base: String,
    /// Identity service backing password and OAuth login.
    pub identity_base: String,
}

impl ClientConfig {
    /// Resolve the configuration compiled into this build.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("VOLUNTEERHUB_API_BASE"),
            option_env!("VOLUNTEERHUB_IDENTITY_BASE"),
        )
    }

    fn from_values(api_base: Option<&str>, identity_base: Option<&str>) -> Self {
        Self {
            api_base: normalize_base(api_base, DEFAULT_API_BASE),
            identity_base: normalize_base(identity_base, DEFAULT_IDENTITY_BASE),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}
