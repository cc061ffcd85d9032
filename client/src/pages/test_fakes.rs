//! In-memory collaborators for page flow tests.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::net::api::{ApiError, VolunteerApi};
use crate::net::identity::{AuthError, AuthProvider, OAuthProvider};
use crate::net::types::{LoginCredentials, SessionTokenRequest, SessionTokenResponse, SessionUser, VolunteerPost};
use crate::state::toast::{Notifier, ToastKind};

pub fn alice() -> SessionUser {
    SessionUser {
        uid: "uid-alice".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: Some("a@b.com".to_owned()),
    }
}

pub struct FakeAuth {
    pub result: Result<SessionUser, AuthError>,
    pub password_logins: RefCell<Vec<LoginCredentials>>,
    pub oauth_logins: RefCell<Vec<OAuthProvider>>,
}

impl FakeAuth {
    pub fn accepting(user: SessionUser) -> Self {
        Self::with_result(Ok(user))
    }

    pub fn rejecting() -> Self {
        Self::with_result(Err(AuthError::Rejected { status: 401 }))
    }

    fn with_result(result: Result<SessionUser, AuthError>) -> Self {
        Self { result, password_logins: RefCell::new(Vec::new()), oauth_logins: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    async fn login_user(&self, credentials: &LoginCredentials) -> Result<SessionUser, AuthError> {
        self.password_logins.borrow_mut().push(credentials.clone());
        self.result.clone()
    }

    async fn oauth_login(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError> {
        self.oauth_logins.borrow_mut().push(provider);
        self.result.clone()
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        Ok(self.result.clone().ok())
    }
}

pub struct FakeApi {
    pub token_result: Result<SessionTokenResponse, ApiError>,
    pub post_result: Result<u16, ApiError>,
    pub token_requests: RefCell<Vec<SessionTokenRequest>>,
    pub posts: RefCell<Vec<VolunteerPost>>,
}

impl FakeApi {
    pub fn new(token_result: Result<SessionTokenResponse, ApiError>, post_result: Result<u16, ApiError>) -> Self {
        Self { token_result, post_result, token_requests: RefCell::new(Vec::new()), posts: RefCell::new(Vec::new()) }
    }

    pub fn acknowledging() -> Self {
        Self::new(Ok(SessionTokenResponse { message: Some("ok".to_owned()) }), Ok(201))
    }

    pub fn with_post_status(status: u16) -> Self {
        Self::new(Ok(SessionTokenResponse::default()), Ok(status))
    }

    pub fn call_count(&self) -> usize {
        self.token_requests.borrow().len() + self.posts.borrow().len()
    }
}

#[async_trait(?Send)]
impl VolunteerApi for FakeApi {
    async fn issue_session_token(&self, request: &SessionTokenRequest) -> Result<SessionTokenResponse, ApiError> {
        self.token_requests.borrow_mut().push(request.clone());
        self.token_result.clone()
    }

    async fn add_volunteer_post(&self, post: &VolunteerPost) -> Result<u16, ApiError> {
        self.posts.borrow_mut().push(post.clone());
        self.post_result.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_owned()));
    }
}
