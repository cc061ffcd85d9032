//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` is handed to each page as a prop. It pairs the reactive
//! `AuthState` with the identity provider and is the only place that writes
//! the current user; pages just call its login functions and read the state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::net::identity::{AuthError, AuthProvider, OAuthProvider};
use crate::net::types::{LoginCredentials, SessionUser};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the session lookup is outstanding.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the outcome of a successful sign-in.
    pub fn signed_in(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.loading = false;
    }
}

pub type SharedAuthProvider = Arc<dyn AuthProvider + Send + Sync>;

/// Injected session handle: reactive state plus the provider that mutates it.
#[derive(Clone)]
pub struct AuthSession {
    pub state: RwSignal<AuthState>,
    provider: SharedAuthProvider,
}

impl AuthSession {
    pub fn new(provider: SharedAuthProvider) -> Self {
        Self { state: RwSignal::new(AuthState::bootstrapping()), provider }
    }

    /// Current user without subscribing the caller to changes.
    pub fn user(&self) -> Option<SessionUser> {
        self.state.with_untracked(|s| s.user.clone())
    }

    /// Load the identity behind the existing browser session.
    pub async fn refresh(&self) {
        let user = match self.provider.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("session lookup failed: {e}");
                None
            }
        };
        // A sign-in that completed while the lookup was in flight wins.
        self.state.update(|s| {
            if s.user.is_none() {
                s.user = user;
            }
            s.loading = false;
        });
    }

    fn record(&self, result: &Result<SessionUser, AuthError>) {
        if let Ok(user) = result {
            let user = user.clone();
            self.state.update(|s| s.signed_in(user));
        }
    }
}

#[async_trait(?Send)]
impl AuthProvider for AuthSession {
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<SessionUser, AuthError> {
        let result = self.provider.login_user(credentials).await;
        self.record(&result);
        result
    }

    async fn oauth_login(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError> {
        let result = self.provider.oauth_login(provider).await;
        self.record(&result);
        result
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        self.provider.current_user().await
    }
}
