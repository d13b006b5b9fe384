//! Change-password screen

use cams_shared::validation::validators;

use crate::domain::value_objects::{Advisory, SecureField};
use crate::errors::AuthError;

use super::{should_show, should_show_mismatch};

#[derive(Debug, Default)]
pub struct ChangePasswordScreen {
    new_password: SecureField,
    confirm_password: SecureField,
    show_password_error: bool,
    show_mismatch_error: bool,
    submit_error: Option<AuthError>,
}

impl ChangePasswordScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_password(&self) -> &SecureField {
        &self.new_password
    }

    pub fn confirm_password(&self) -> &SecureField {
        &self.confirm_password
    }

    pub fn submit_error(&self) -> Option<&AuthError> {
        self.submit_error.as_ref()
    }

    pub fn set_new_password(&mut self, password: impl Into<String>) {
        self.new_password.set(password);
        let value = self.new_password.value();
        self.show_password_error = should_show(value, validators::is_valid_password(value));
        self.show_mismatch_error = should_show_mismatch(value, self.confirm_password.value());
        self.submit_error = None;
    }

    pub fn set_confirm_password(&mut self, confirmation: impl Into<String>) {
        self.confirm_password.set(confirmation);
        self.show_mismatch_error =
            should_show_mismatch(self.new_password.value(), self.confirm_password.value());
        self.submit_error = None;
    }

    pub fn toggle_new_password_visibility(&mut self) {
        self.new_password.toggle_visibility();
    }

    pub fn toggle_confirm_visibility(&mut self) {
        self.confirm_password.toggle_visibility();
    }

    pub fn set_submit_error(&mut self, error: AuthError) {
        self.submit_error = Some(error);
    }

    pub fn can_submit(&self) -> bool {
        validators::is_valid_password(self.new_password.value())
            && self.new_password.value() == self.confirm_password.value()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.show_password_error {
            advisories.push(Advisory::WeakPassword);
        }
        if self.show_mismatch_error {
            advisories.push(Advisory::PasswordMismatch);
        }
        advisories
    }
}
