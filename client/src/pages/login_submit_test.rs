use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::SessionTokenResponse;
use crate::pages::test_fakes::{FakeApi, FakeAuth, RecordingNotifier, alice};
use crate::state::login_form::LoginForm;
use crate::state::toast::ToastKind;

fn credentials() -> LoginCredentials {
    LoginCredentials { email: "a@b.com".to_owned(), password: "secret123".to_owned() }
}

// =============================================================
// Password login
// =============================================================

#[test]
fn password_login_exchanges_email_and_navigates_to_default_route() {
    let auth = FakeAuth::accepting(alice());
    let api = FakeApi::acknowledging();
    let notifier = RecordingNotifier::default();

    let mut form =
        LoginForm { email: "a@b.com".to_owned(), password: "secret123".to_owned(), ..LoginForm::default() };
    let sent = form.begin_submit().unwrap();
    form.clear_fields();
    assert!(form.email.is_empty() && form.password.is_empty());

    let outcome = block_on(submit_credentials(&auth, &api, &notifier, sent, "/"));

    assert_eq!(outcome, LoginOutcome::Navigate("/".to_owned()));
    assert_eq!(*auth.password_logins.borrow(), vec![credentials()]);
    assert_eq!(*api.token_requests.borrow(), vec![SessionTokenRequest { email: "a@b.com".to_owned() }]);
    assert_eq!(notifier.recorded(), vec![(ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_owned())]);
}

#[test]
fn password_login_navigates_to_recorded_location() {
    let auth = FakeAuth::accepting(alice());
    let api = FakeApi::acknowledging();
    let notifier = RecordingNotifier::default();

    let outcome = block_on(submit_credentials(&auth, &api, &notifier, credentials(), "/add_volunteer_post"));
    assert_eq!(outcome, LoginOutcome::Navigate("/add_volunteer_post".to_owned()));
}

#[test]
fn rejected_login_skips_session_exchange() {
    let auth = FakeAuth::rejecting();
    let api = FakeApi::acknowledging();
    let notifier = RecordingNotifier::default();

    let outcome = block_on(submit_credentials(&auth, &api, &notifier, credentials(), "/"));

    assert_eq!(outcome, LoginOutcome::AuthFailed);
    assert_eq!(api.call_count(), 0);
    assert_eq!(notifier.recorded(), vec![(ToastKind::Error, LOGIN_FAILED_MESSAGE.to_owned())]);
}

#[test]
fn session_response_without_message_does_not_navigate() {
    let auth = FakeAuth::accepting(alice());
    let api = FakeApi::new(Ok(SessionTokenResponse { message: None }), Ok(201));
    let notifier = RecordingNotifier::default();

    let outcome = block_on(submit_credentials(&auth, &api, &notifier, credentials(), "/"));

    assert_eq!(outcome, LoginOutcome::SessionUnacknowledged);
    assert_eq!(notifier.recorded(), vec![(ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_owned())]);
}

#[test]
fn session_exchange_failure_notifies_after_login_success() {
    let auth = FakeAuth::accepting(alice());
    let api = FakeApi::new(Err(ApiError::Transport("offline".to_owned())), Ok(201));
    let notifier = RecordingNotifier::default();

    let outcome = block_on(submit_credentials(&auth, &api, &notifier, credentials(), "/"));

    assert_eq!(outcome, LoginOutcome::SessionFailed);
    assert_eq!(
        notifier.recorded(),
        vec![
            (ToastKind::Success, LOGIN_SUCCESS_MESSAGE.to_owned()),
            (ToastKind::Error, SESSION_FAILED_MESSAGE.to_owned()),
        ]
    );
}

// =============================================================
// Federated login
// =============================================================

#[test]
fn github_login_success_does_not_request_backend_session() {
    let auth = FakeAuth::accepting(alice());
    let notifier = RecordingNotifier::default();

    let user = block_on(submit_federated(&auth, &notifier, OAuthProvider::GitHub));

    assert_eq!(user, Some(alice()));
    assert_eq!(*auth.oauth_logins.borrow(), vec![OAuthProvider::GitHub]);
    assert_eq!(notifier.recorded(), vec![(ToastKind::Success, "Logged in with GitHub successfully".to_owned())]);
}

#[test]
fn google_login_failure_notifies() {
    let auth = FakeAuth::rejecting();
    let notifier = RecordingNotifier::default();

    let user = block_on(submit_federated(&auth, &notifier, OAuthProvider::Google));

    assert_eq!(user, None);
    assert_eq!(
        notifier.recorded(),
        vec![(ToastKind::Error, "Error logging in with Google. Please try again.".to_owned())]
    );
}

#[test]
fn federated_messages_name_the_provider() {
    assert_eq!(federated_success_message(OAuthProvider::Google), "Logged in with Google successfully");
    assert_eq!(
        federated_failure_message(OAuthProvider::GitHub),
        "Error logging in with GitHub. Please try again."
    );
}
