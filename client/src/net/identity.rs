//! Client for the external authentication capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity service owns credentials and the federated GitHub/Google
//! handshakes. This crate only asks it to sign a user in and reads back the
//! resulting identity `{ uid, displayName, email }`. Pages never talk to it
//! directly; they go through `state::auth::AuthSession`, which records the
//! identity in shared state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use super::types::{LoginCredentials, SessionUser};
#[cfg(feature = "hydrate")]
use super::types::AuthUserResponse;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authentication rejected: {status}")]
    Rejected { status: u16 },
    #[error("http request failed: {0}")]
    Transport(String),
    #[error("request body encode failed: {0}")]
    Encode(String),
    #[error("response body decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Federated login providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    GitHub,
    Google,
}

impl OAuthProvider {
    /// Path segment used by the identity service.
    pub fn slug(self) -> &'static str {
        match self {
            OAuthProvider::GitHub => "github",
            OAuthProvider::Google => "google",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OAuthProvider::GitHub => "GitHub",
            OAuthProvider::Google => "Google",
        }
    }
}

/// The three login capabilities plus the current-session read.
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<SessionUser, AuthError>;

    async fn oauth_login(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError>;

    /// Identity behind the current browser session, `None` when signed out.
    async fn current_user(&self) -> Result<Option<SessionUser>, AuthError>;

    async fn github_login(&self) -> Result<SessionUser, AuthError> {
        self.oauth_login(OAuthProvider::GitHub).await
    }

    async fn google_login(&self) -> Result<SessionUser, AuthError> {
        self.oauth_login(OAuthProvider::Google).await
    }
}

/// HTTP-backed provider talking to the identity service with cookies included.
#[derive(Clone, Debug)]
pub struct RemoteAuthProvider {
    base: String,
}

impl RemoteAuthProvider {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn login_endpoint(base: &str) -> String {
    format!("{base}/login")
}

fn oauth_endpoint(base: &str, provider: OAuthProvider) -> String {
    format!("{base}/oauth/{}", provider.slug())
}

fn current_user_endpoint(base: &str) -> String {
    format!("{base}/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403 | 404)
}

#[cfg(feature = "hydrate")]
async fn send_for_user(request: gloo_net::http::Request) -> Result<SessionUser, AuthError> {
    let resp = request.send().await.map_err(|e| AuthError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(AuthError::Rejected { status: resp.status() });
    }
    let body: AuthUserResponse = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(body.user)
}

#[async_trait(?Send)]
impl AuthProvider for RemoteAuthProvider {
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<SessionUser, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&login_endpoint(&self.base))
                .credentials(web_sys::RequestCredentials::Include)
                .json(credentials)
                .map_err(|e| AuthError::Encode(e.to_string()))?;
            send_for_user(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (login_endpoint(&self.base), credentials);
            Err(AuthError::Unavailable)
        }
    }

    async fn oauth_login(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&oauth_endpoint(&self.base, provider))
                .credentials(web_sys::RequestCredentials::Include)
                .build()
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            send_for_user(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = oauth_endpoint(&self.base, provider);
            Err(AuthError::Unavailable)
        }
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&current_user_endpoint(&self.base))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if is_signed_out_status(resp.status()) {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(AuthError::Rejected { status: resp.status() });
            }
            let body: AuthUserResponse = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(Some(body.user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current_user_endpoint(&self.base);
            Ok(None)
        }
    }
}
