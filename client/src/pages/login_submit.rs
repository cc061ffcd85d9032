//! Login submission flows shared by the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Password login authenticates with the identity provider and then exchanges
//! the email for a backend session via `POST /jwt`. GitHub/Google login stop
//! after the provider call and do not request a backend session.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the attempt: one toast, one log line, no retry.

#[cfg(test)]
#[path = "login_submit_test.rs"]
mod login_submit_test;

use crate::net::api::VolunteerApi;
use crate::net::identity::{AuthProvider, OAuthProvider};
use crate::net::types::{LoginCredentials, SessionTokenRequest, SessionUser};
use crate::state::toast::Notifier;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in user successfully";
pub const LOGIN_FAILED_MESSAGE: &str = "Error logging in user. Please try again.";
pub const SESSION_FAILED_MESSAGE: &str = "Error establishing session. Please try again.";

/// How a password login attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session established; go to the contained path.
    Navigate(String),
    /// Authenticated, but `/jwt` answered without a `message`.
    SessionUnacknowledged,
    /// Authenticated, but `/jwt` failed. The provider session is left as is.
    SessionFailed,
    AuthFailed,
}

pub fn federated_success_message(provider: OAuthProvider) -> String {
    format!("Logged in with {} successfully", provider.label())
}

pub fn federated_failure_message(provider: OAuthProvider) -> String {
    format!("Error logging in with {}. Please try again.", provider.label())
}

/// Authenticate with email + password, then request a backend session.
pub async fn submit_credentials<A, V, N>(
    auth: &A,
    api: &V,
    notifier: &N,
    credentials: LoginCredentials,
    redirect_target: &str,
) -> LoginOutcome
where
    A: AuthProvider + ?Sized,
    V: VolunteerApi + ?Sized,
    N: Notifier + ?Sized,
{
    let user = match auth.login_user(&credentials).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("password login failed: {e}");
            notifier.error(LOGIN_FAILED_MESSAGE);
            return LoginOutcome::AuthFailed;
        }
    };
    log::info!("logged in user uid={}", user.uid);
    notifier.success(LOGIN_SUCCESS_MESSAGE);

    let request = SessionTokenRequest { email: credentials.email };
    match api.issue_session_token(&request).await {
        Ok(response) if response.is_acknowledged() => {
            log::debug!("session established: {:?}", response.message);
            LoginOutcome::Navigate(redirect_target.to_owned())
        }
        Ok(_) => {
            log::warn!("session token response carried no message");
            LoginOutcome::SessionUnacknowledged
        }
        Err(e) => {
            log::error!("session token request failed: {e}");
            notifier.error(SESSION_FAILED_MESSAGE);
            LoginOutcome::SessionFailed
        }
    }
}

/// Sign in through GitHub or Google. No backend session is requested.
pub async fn submit_federated<A, N>(auth: &A, notifier: &N, provider: OAuthProvider) -> Option<SessionUser>
where
    A: AuthProvider + ?Sized,
    N: Notifier + ?Sized,
{
    match auth.oauth_login(provider).await {
        Ok(user) => {
            log::info!("logged in with {} uid={}", provider.label(), user.uid);
            notifier.success(&federated_success_message(provider));
            Some(user)
        }
        Err(e) => {
            log::error!("{} login failed: {e}", provider.label());
            notifier.error(&federated_failure_message(provider));
            None
        }
    }
}
