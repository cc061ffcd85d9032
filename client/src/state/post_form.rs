//! Add-volunteer-post form model.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings exactly as typed; `validate` turns them into
//! a typed `PostDraft` or a per-field error map. Organizer fields are
//! read-only and always come from the session identity. Once a submit has
//! failed validation, each edit re-checks the edited field so messages clear
//! as the user fixes them.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use std::collections::BTreeMap;

use crate::net::types::{
    Category, FALLBACK_ORGANIZER_EMAIL, FALLBACK_ORGANIZER_NAME, SessionUser, VolunteerPost,
};

pub const VOLUNTEERS_NOT_WHOLE_NUMBER_MESSAGE: &str = "No. of Volunteers Needed must be a whole number";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostField {
    Thumbnail,
    PostTitle,
    Description,
    Category,
    Location,
    VolunteersNeeded,
    Deadline,
    OrganizerName,
    OrganizerEmail,
}

impl PostField {
    pub const ALL: [PostField; 9] = [
        PostField::Thumbnail,
        PostField::PostTitle,
        PostField::Description,
        PostField::Category,
        PostField::Location,
        PostField::VolunteersNeeded,
        PostField::Deadline,
        PostField::OrganizerName,
        PostField::OrganizerEmail,
    ];

    /// Form control name, matching the request body key.
    pub fn name(self) -> &'static str {
        match self {
            PostField::Thumbnail => "thumbnail",
            PostField::PostTitle => "postTitle",
            PostField::Description => "description",
            PostField::Category => "category",
            PostField::Location => "location",
            PostField::VolunteersNeeded => "volunteersNeeded",
            PostField::Deadline => "deadline",
            PostField::OrganizerName => "organizerName",
            PostField::OrganizerEmail => "organizerEmail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostField::Thumbnail => "Thumbnail",
            PostField::PostTitle => "Post Title",
            PostField::Description => "Description",
            PostField::Category => "Category",
            PostField::Location => "Location",
            PostField::VolunteersNeeded => "No. of Volunteers Needed",
            PostField::Deadline => "Deadline",
            PostField::OrganizerName => "Organizer Name",
            PostField::OrganizerEmail => "Organizer Email",
        }
    }

    /// Inline message for a blank value; `None` for optional fields.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            PostField::Thumbnail => Some("Thumbnail is required"),
            PostField::PostTitle => Some("Post Title is required"),
            PostField::Description => Some("Description is required"),
            PostField::Category => Some("Category is required"),
            PostField::Location => None,
            PostField::VolunteersNeeded => Some("No. of Volunteers Needed is required"),
            PostField::Deadline => Some("Deadline is required"),
            PostField::OrganizerName => Some("Organizer Name is required"),
            PostField::OrganizerEmail => Some("Organizer Email is required"),
        }
    }

    pub fn is_read_only(self) -> bool {
        matches!(self, PostField::OrganizerName | PostField::OrganizerEmail)
    }
}

pub type FieldErrors = BTreeMap<PostField, &'static str>;

/// Validated form contents, still missing the session `user_id`.
#[derive(Clone, Debug, PartialEq)]
pub struct PostDraft {
    pub thumbnail: String,
    pub post_title: String,
    pub description: String,
    pub category: Category,
    pub location: Option<String>,
    pub volunteers_needed: u32,
    pub deadline: String,
    pub organizer_name: String,
    pub organizer_email: String,
}

impl PostDraft {
    /// Attach the session identifier, producing the request body.
    pub fn stamp(self, user: &SessionUser) -> VolunteerPost {
        VolunteerPost {
            thumbnail: self.thumbnail,
            post_title: self.post_title,
            description: self.description,
            category: self.category,
            location: self.location,
            volunteers_needed: self.volunteers_needed,
            deadline: self.deadline,
            organizer_name: self.organizer_name,
            organizer_email: self.organizer_email,
            user_id: user.uid.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    thumbnail: String,
    post_title: String,
    description: String,
    category: String,
    location: String,
    volunteers_needed: String,
    deadline: String,
    organizer_name: String,
    organizer_email: String,
    errors: FieldErrors,
    pub submitting: bool,
}

impl PostForm {
    /// Empty form with organizer fields populated from `user`.
    pub fn for_user(user: Option<&SessionUser>) -> Self {
        let (organizer_name, organizer_email) = organizer_identity(user);
        Self {
            thumbnail: String::new(),
            post_title: String::new(),
            description: String::new(),
            category: String::new(),
            location: String::new(),
            volunteers_needed: String::new(),
            deadline: String::new(),
            organizer_name,
            organizer_email,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn value(&self, field: PostField) -> &str {
        match field {
            PostField::Thumbnail => &self.thumbnail,
            PostField::PostTitle => &self.post_title,
            PostField::Description => &self.description,
            PostField::Category => &self.category,
            PostField::Location => &self.location,
            PostField::VolunteersNeeded => &self.volunteers_needed,
            PostField::Deadline => &self.deadline,
            PostField::OrganizerName => &self.organizer_name,
            PostField::OrganizerEmail => &self.organizer_email,
        }
    }

    /// Apply a user edit. Read-only fields ignore edits.
    pub fn set(&mut self, field: PostField, value: impl Into<String>) {
        if field.is_read_only() {
            return;
        }
        *self.slot(field) = value.into();
        if !self.errors.is_empty() {
            match self.check(field) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(&field),
            };
        }
    }

    pub fn error(&self, field: PostField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Re-derive the read-only organizer fields from the session.
    pub fn sync_identity(&mut self, user: Option<&SessionUser>) {
        let (name, email) = organizer_identity(user);
        self.organizer_name = name;
        self.organizer_email = email;
        for field in [PostField::OrganizerName, PostField::OrganizerEmail] {
            self.errors.remove(&field);
        }
    }

    /// Clear every field back to its default; identity repopulates from `user`.
    pub fn reset(&mut self, user: Option<&SessionUser>) {
        *self = Self::for_user(user);
    }

    /// Check every field without mutating the form.
    ///
    /// # Errors
    ///
    /// Returns the inline message for each invalid field.
    pub fn validate(&self) -> Result<PostDraft, FieldErrors> {
        let errors: FieldErrors =
            PostField::ALL.into_iter().filter_map(|field| self.check(field).map(|m| (field, m))).collect();
        let category = Category::from_form_value(self.category.trim());
        let volunteers_needed = self.volunteers_needed.trim().parse::<u32>().ok();
        let (Some(category), Some(volunteers_needed)) = (category, volunteers_needed) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let location = self.location.trim();

        Ok(PostDraft {
            thumbnail: self.thumbnail.trim().to_owned(),
            post_title: self.post_title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category,
            location: (!location.is_empty()).then(|| location.to_owned()),
            volunteers_needed,
            deadline: self.deadline.trim().to_owned(),
            organizer_name: self.organizer_name.clone(),
            organizer_email: self.organizer_email.clone(),
        })
    }

    /// Validate, record inline errors, and claim the in-flight slot.
    ///
    /// Returns `None` when a submit is already running or validation failed;
    /// in both cases nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<PostDraft> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(draft) => {
                self.errors.clear();
                self.submitting = true;
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn check(&self, field: PostField) -> Option<&'static str> {
        let raw = self.value(field).trim();
        if raw.is_empty() {
            return field.required_message();
        }
        match field {
            PostField::Category if Category::from_form_value(raw).is_none() => field.required_message(),
            PostField::VolunteersNeeded if raw.parse::<u32>().is_err() => Some(VOLUNTEERS_NOT_WHOLE_NUMBER_MESSAGE),
            _ => None,
        }
    }

    fn slot(&mut self, field: PostField) -> &mut String {
        match field {
            PostField::Thumbnail => &mut self.thumbnail,
            PostField::PostTitle => &mut self.post_title,
            PostField::Description => &mut self.description,
            PostField::Category => &mut self.category,
            PostField::Location => &mut self.location,
            PostField::VolunteersNeeded => &mut self.volunteers_needed,
            PostField::Deadline => &mut self.deadline,
            PostField::OrganizerName => &mut self.organizer_name,
            PostField::OrganizerEmail => &mut self.organizer_email,
        }
    }
}

fn organizer_identity(user: Option<&SessionUser>) -> (String, String) {
    match user {
        Some(user) => (user.organizer_name(), user.organizer_email()),
        None => (FALLBACK_ORGANIZER_NAME.to_owned(), FALLBACK_ORGANIZER_EMAIL.to_owned()),
    }
}
