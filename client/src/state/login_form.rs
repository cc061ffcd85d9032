//! Login form model: field values, password masking and the in-flight guard.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::types::LoginCredentials;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";

/// Why a login submit did not dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginBlocked {
    /// A previous submit is still running.
    InFlight,
    MissingField,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
    pub submitting: bool,
}

impl LoginForm {
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Validate and claim the in-flight slot, returning the credentials to send.
    ///
    /// On success `submitting` stays set until [`LoginForm::finish_submit`].
    ///
    /// # Errors
    ///
    /// Returns `LoginBlocked` without touching the fields when a submit is
    /// already running or either field is blank.
    pub fn begin_submit(&mut self) -> Result<LoginCredentials, LoginBlocked> {
        if self.submitting {
            return Err(LoginBlocked::InFlight);
        }
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginBlocked::MissingField);
        }
        let credentials = LoginCredentials { email: email.to_owned(), password: self.password.clone() };
        self.submitting = true;
        Ok(credentials)
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Clear the visible inputs. Masking preference and the in-flight flag survive.
    pub fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
        self.remember_me = false;
    }
}
