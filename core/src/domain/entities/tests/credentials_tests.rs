//! Unit tests for credential and registration form entities

use cams_shared::error_codes;
use cams_shared::validation::Validate;

use crate::domain::entities::credentials::{Credentials, RegistrationForm};

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        credentials: Credentials::new("grower@farm.io", "Abcdef1!"),
        confirm_password: "Abcdef1!".to_string(),
        api_key: "PLAK-123".to_string(),
    }
}

#[test]
fn test_valid_credentials() {
    let credentials = Credentials::new("grower@farm.io", "Abcdef1!");
    assert!(credentials.validate().is_ok());
}

#[test]
fn test_invalid_credentials_report_both_fields() {
    let credentials = Credentials::new("grower@farm", "short");
    let errors = credentials.validate().unwrap_err();
    assert!(errors.contains("email", error_codes::INVALID_EMAIL));
    assert!(errors.contains("password", error_codes::WEAK_PASSWORD));
}

#[test]
fn test_registration_form_valid() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn test_registration_form_each_condition_blocks() {
    let mut form = valid_form();
    form.credentials.email = "not-an-email".to_string();
    assert!(form.validate().is_err());

    let mut form = valid_form();
    form.credentials.password = "abcdef1!".to_string();
    form.confirm_password = "abcdef1!".to_string();
    assert!(form.validate().is_err());

    let mut form = valid_form();
    form.confirm_password = "Abcdef1?".to_string();
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("confirm_password", error_codes::PASSWORD_MISMATCH));

    let mut form = valid_form();
    form.api_key.clear();
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("api_key", error_codes::API_KEY_REQUIRED));
}

#[test]
fn test_validation_is_repeatable() {
    let form = valid_form();
    assert_eq!(form.validate(), form.validate());

    let mut broken = valid_form();
    broken.api_key.clear();
    assert_eq!(broken.validate(), broken.validate());
}
