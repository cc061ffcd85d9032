use super::*;

fn sample_post() -> VolunteerPost {
    VolunteerPost {
        thumbnail: "https://img.example.test/a.png".to_owned(),
        post_title: "Beach cleanup".to_owned(),
        description: "Bring gloves".to_owned(),
        category: Category::SocialService,
        location: None,
        volunteers_needed: 12,
        deadline: "2026-11-01".to_owned(),
        organizer_name: "Alice".to_owned(),
        organizer_email: "alice@example.com".to_owned(),
        user_id: "uid-1".to_owned(),
    }
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_deserializes_display_name_key() {
    let user: SessionUser =
        serde_json::from_str(r#"{"uid":"u1","displayName":"Alice","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.uid, "u1");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn session_user_missing_optional_fields_default_to_none() {
    let user: SessionUser = serde_json::from_str(r#"{"uid":"u1"}"#).unwrap();
    assert!(user.display_name.is_none());
    assert!(user.email.is_none());
}

#[test]
fn organizer_fields_fall_back_when_identity_is_incomplete() {
    let user = SessionUser { uid: "u1".to_owned(), display_name: None, email: Some("  ".to_owned()) };
    assert_eq!(user.organizer_name(), FALLBACK_ORGANIZER_NAME);
    assert_eq!(user.organizer_email(), FALLBACK_ORGANIZER_EMAIL);
}

#[test]
fn organizer_fields_use_identity_when_present() {
    let user = SessionUser {
        uid: "u1".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
    };
    assert_eq!(user.organizer_name(), "Alice");
    assert_eq!(user.organizer_email(), "alice@example.com");
}

// =============================================================
// Session token
// =============================================================

#[test]
fn session_token_response_acknowledged_only_with_message() {
    let ok: SessionTokenResponse = serde_json::from_str(r#"{"message":"ok","token":"x"}"#).unwrap();
    assert!(ok.is_acknowledged());

    let missing: SessionTokenResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(!missing.is_acknowledged());

    let empty: SessionTokenResponse = serde_json::from_str(r#"{"message":""}"#).unwrap();
    assert!(!empty.is_acknowledged());
}

#[test]
fn session_token_request_serializes_email_only() {
    let body = serde_json::to_value(SessionTokenRequest { email: "a@b.com".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com" }));
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_form_values_match_wire_values() {
    for category in Category::ALL {
        let wire = serde_json::to_value(category).unwrap();
        assert_eq!(wire, serde_json::Value::String(category.as_str().to_owned()));
        assert_eq!(Category::from_form_value(category.as_str()), Some(category));
    }
}

#[test]
fn category_rejects_blank_and_unknown_values() {
    assert_eq!(Category::from_form_value(""), None);
    assert_eq!(Category::from_form_value("sports"), None);
}

#[test]
fn category_labels_are_human_readable() {
    assert_eq!(Category::SocialService.label(), "Social Service");
    assert_eq!(Category::AnimalWelfare.label(), "Animal Welfare");
}

// =============================================================
// VolunteerPost
// =============================================================

#[test]
fn volunteer_post_uses_backend_field_names() {
    let body = serde_json::to_value(sample_post()).unwrap();
    assert_eq!(body["postTitle"], "Beach cleanup");
    assert_eq!(body["category"], "socialService");
    assert_eq!(body["volunteersNeeded"], 12);
    assert_eq!(body["organizerName"], "Alice");
    assert_eq!(body["organizerEmail"], "alice@example.com");
    assert_eq!(body["user_id"], "uid-1");
    assert!(body.get("userId").is_none());
}

#[test]
fn volunteer_post_omits_blank_location() {
    let body = serde_json::to_value(sample_post()).unwrap();
    assert!(body.get("location").is_none());

    let mut with_location = sample_post();
    with_location.location = Some("Dhaka".to_owned());
    let body = serde_json::to_value(with_location).unwrap();
    assert_eq!(body["location"], "Dhaka");
}
