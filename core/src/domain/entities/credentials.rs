//! Login and registration form entities.

use cams_shared::error_codes;
use cams_shared::validation::{validators, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Email and password pair collected by the login screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_email_valid(&self) -> bool {
        validators::is_valid_email(&self.email)
    }

    pub fn is_password_valid(&self) -> bool {
        validators::is_valid_password(&self.password)
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.is_email_valid() {
            errors.add_error("email", error_codes::INVALID_EMAIL);
        }
        if !self.is_password_valid() {
            errors.add_error("password", error_codes::WEAK_PASSWORD);
        }
        errors.into_result()
    }
}

/// Account creation form: credentials plus confirmation and imagery API key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub credentials: Credentials,
    pub confirm_password: String,
    /// PlanetScope API key used for imagery requests
    pub api_key: String,
}

impl RegistrationForm {
    pub fn passwords_match(&self) -> bool {
        self.credentials.password == self.confirm_password
    }

    pub fn has_api_key(&self) -> bool {
        validators::is_present(&self.api_key)
    }
}

impl Validate for RegistrationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.credentials.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if !self.passwords_match() {
            errors.add_error("confirm_password", error_codes::PASSWORD_MISMATCH);
        }
        if !self.has_api_key() {
            errors.add_error("api_key", error_codes::API_KEY_REQUIRED);
        }
        errors.into_result()
    }
}
