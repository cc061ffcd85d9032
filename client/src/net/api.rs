//! REST client for the volunteer backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie travels with each request.
//! Server-side (SSR): calls return `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and body errors become `ApiError`; HTTP status interpretation is
//! left to the caller for post creation, where only 201 counts as success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{SessionTokenRequest, SessionTokenResponse, VolunteerPost};

/// Status returned by the backend when a post was created.
pub const STATUS_CREATED: u16 = 201;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Transport(String),
    #[error("request body encode failed: {0}")]
    Encode(String),
    #[error("response body decode failed: {0}")]
    Decode(String),
    #[error("{0}")]
    Status(String),
    #[error("not available on server")]
    Unavailable,
}

/// Calls the pages make against the volunteer backend.
#[async_trait(?Send)]
pub trait VolunteerApi {
    /// Exchange a verified email for a session cookie via `POST /jwt`.
    async fn issue_session_token(&self, request: &SessionTokenRequest) -> Result<SessionTokenResponse, ApiError>;

    /// Create a post via `POST /api/add_volunteer_post`, returning the HTTP status.
    async fn add_volunteer_post(&self, post: &VolunteerPost) -> Result<u16, ApiError>;
}

pub type SharedVolunteerApi = Arc<dyn VolunteerApi + Send + Sync>;

/// `gloo-net` implementation targeting a configured API base URL.
#[derive(Clone, Debug)]
pub struct HttpVolunteerApi {
    base: String,
}

impl HttpVolunteerApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn session_token_endpoint(base: &str) -> String {
    format!("{base}/jwt")
}

fn add_volunteer_post_endpoint(base: &str) -> String {
    format!("{base}/api/add_volunteer_post")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_token_failed_message(status: u16) -> String {
    format!("session token request failed: {status}")
}

pub(crate) fn is_created(status: u16) -> bool {
    status == STATUS_CREATED
}

#[async_trait(?Send)]
impl VolunteerApi for HttpVolunteerApi {
    async fn issue_session_token(&self, request: &SessionTokenRequest) -> Result<SessionTokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = session_token_endpoint(&self.base);
            let resp = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(session_token_failed_message(resp.status())));
            }
            resp.json::<SessionTokenResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_token_endpoint(&self.base), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn add_volunteer_post(&self, post: &VolunteerPost) -> Result<u16, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = add_volunteer_post_endpoint(&self.base);
            let resp = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(post)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (add_volunteer_post_endpoint(&self.base), post);
            Err(ApiError::Unavailable)
        }
    }
}
