//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages send signed-out users to `/login?redirect=<path>`; the login
//! page reads `redirect` back to decide where to go after a session is
//! established. Only same-origin paths are honored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_AFTER_LOGIN: &str = "/";
pub const REDIRECT_PARAM: &str = "redirect";

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Login URL that remembers `from` as the post-login destination.
pub fn login_redirect_path(from: &str) -> String {
    if from == DEFAULT_AFTER_LOGIN || !is_local_path(from) {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", urlencoding::encode(from))
}

/// Where to navigate after login: the recorded path, or `/`.
pub fn post_login_target(redirect: Option<&str>) -> String {
    redirect
        .filter(|path| is_local_path(path) && !path.starts_with(LOGIN_PATH))
        .unwrap_or(DEFAULT_AFTER_LOGIN)
        .to_owned()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, from: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(&login_redirect_path(from), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
