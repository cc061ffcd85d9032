//! Wire DTOs for the identity service and the volunteer API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase, except `user_id`) so
//! serde output can be posted as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const FALLBACK_ORGANIZER_NAME: &str = "John Doe";
pub const FALLBACK_ORGANIZER_EMAIL: &str = "john@example.com";

/// Authenticated identity as reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable user identifier; stamped onto posts as `user_id`.
    pub uid: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Organizer name shown on the post form.
    pub fn organizer_name(&self) -> String {
        non_blank(self.display_name.as_deref()).unwrap_or(FALLBACK_ORGANIZER_NAME).to_owned()
    }

    /// Organizer email shown on the post form.
    pub fn organizer_email(&self) -> String {
        non_blank(self.email.as_deref()).unwrap_or(FALLBACK_ORGANIZER_EMAIL).to_owned()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Envelope returned by every identity-service login call.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthUserResponse {
    pub user: SessionUser,
}

/// Email + password pair submitted from the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /jwt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionTokenRequest {
    pub email: String,
}

/// Response of `POST /jwt`. Only `message` is inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionTokenResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl SessionTokenResponse {
    /// True when the backend acknowledged the session with a message.
    pub fn is_acknowledged(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Volunteer opportunity category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Healthcare,
    Education,
    SocialService,
    AnimalWelfare,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Healthcare, Category::Education, Category::SocialService, Category::AnimalWelfare];

    /// Wire/form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::SocialService => "socialService",
            Category::AnimalWelfare => "animalWelfare",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::SocialService => "Social Service",
            Category::AnimalWelfare => "Animal Welfare",
        }
    }

    /// Parse a `<select>` value; `None` for blank or unknown input.
    pub fn from_form_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Volunteer post body sent to `POST /api/add_volunteer_post`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerPost {
    pub thumbnail: String,
    pub post_title: String,
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub volunteers_needed: u32,
    /// `YYYY-MM-DD` as produced by a date input.
    pub deadline: String,
    pub organizer_name: String,
    pub organizer_email: String,
    #[serde(rename = "user_id")]
    pub user_id: String,
}
