use super::*;

#[test]
fn endpoints_join_identity_base() {
    assert_eq!(login_endpoint("/identity"), "/identity/login");
    assert_eq!(oauth_endpoint("/identity", OAuthProvider::GitHub), "/identity/oauth/github");
    assert_eq!(oauth_endpoint("/identity", OAuthProvider::Google), "/identity/oauth/google");
    assert_eq!(current_user_endpoint("/identity"), "/identity/me");
}

#[test]
fn oauth_provider_labels() {
    assert_eq!(OAuthProvider::GitHub.label(), "GitHub");
    assert_eq!(OAuthProvider::Google.label(), "Google");
}

#[test]
fn signed_out_statuses() {
    assert!(is_signed_out_status(401));
    assert!(is_signed_out_status(403));
    assert!(is_signed_out_status(404));
    assert!(!is_signed_out_status(200));
    assert!(!is_signed_out_status(500));
}

#[test]
fn auth_error_display() {
    assert_eq!(AuthError::Rejected { status: 401 }.to_string(), "authentication rejected: 401");
    assert_eq!(AuthError::Unavailable.to_string(), "not available on server");
    assert_eq!(AuthError::Encode("bad".to_owned()).to_string(), "request body encode failed: bad");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn remote_provider_has_no_session_off_browser() {
    let provider = RemoteAuthProvider::new("/identity");
    assert_eq!(futures::executor::block_on(provider.current_user()), Ok(None));
    assert_eq!(futures::executor::block_on(provider.github_login()), Err(AuthError::Unavailable));
}
