//! Account creation screen

use cams_shared::validation::{validators, Validate};

use crate::domain::entities::{Credentials, RegistrationForm};
use crate::domain::value_objects::{Advisory, SecureField};
use crate::errors::AuthError;

use super::{should_show, should_show_mismatch};

#[derive(Debug, Default)]
pub struct RegisterScreen {
    email: String,
    password: SecureField,
    confirm_password: SecureField,
    api_key: String,
    show_email_error: bool,
    show_password_error: bool,
    show_mismatch_error: bool,
    submit_error: Option<AuthError>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecureField {
        &self.password
    }

    pub fn confirm_password(&self) -> &SecureField {
        &self.confirm_password
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn submit_error(&self) -> Option<&AuthError> {
        self.submit_error.as_ref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.show_email_error = should_show(&self.email, validators::is_valid_email(&self.email));
        self.submit_error = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password.set(password);
        let value = self.password.value();
        self.show_password_error = should_show(value, validators::is_valid_password(value));
        self.show_mismatch_error = should_show_mismatch(value, self.confirm_password.value());
        self.submit_error = None;
    }

    pub fn set_confirm_password(&mut self, confirmation: impl Into<String>) {
        self.confirm_password.set(confirmation);
        self.show_mismatch_error =
            should_show_mismatch(self.password.value(), self.confirm_password.value());
        self.submit_error = None;
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        self.submit_error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password.toggle_visibility();
    }

    pub fn toggle_confirm_visibility(&mut self) {
        self.confirm_password.toggle_visibility();
    }

    pub fn set_submit_error(&mut self, error: AuthError) {
        self.submit_error = Some(error);
    }

    pub fn form(&self) -> RegistrationForm {
        RegistrationForm {
            credentials: Credentials::new(self.email.clone(), self.password.value()),
            confirm_password: self.confirm_password.value().to_string(),
            api_key: self.api_key.clone(),
        }
    }

    /// Valid email, valid password, matching confirmation and an API key
    pub fn can_submit(&self) -> bool {
        self.form().validate().is_ok()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.show_email_error {
            advisories.push(Advisory::InvalidEmail);
        }
        if self.show_password_error {
            advisories.push(Advisory::WeakPassword);
        }
        if self.show_mismatch_error {
            advisories.push(Advisory::PasswordMismatch);
        }
        advisories
    }
}
