//! Field validation utilities
//!
//! The validators here are pure functions with no UI binding so every screen
//! that collects an email or password applies exactly the same rules.

use serde::Serialize;

/// Validation error with field-level details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.add(ValidationError::new(field, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether a given field failed with a given code
    pub fn contains(&self, field: &str, code: &str) -> bool {
        self.errors.iter().any(|e| e.field == field && e.code == code)
    }

    /// Turn the collection into a `Result`, `Ok` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Symbols a password must draw at least one character from
    pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

    /// Minimum password length
    pub const PASSWORD_MIN_LENGTH: usize = 8;

    // local-part@domain.tld, TLD of 2..=64 letters, whole string
    static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap()
    });

    // Every character must come from the allowed set
    static PASSWORD_CHARSET_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").unwrap());

    /// Check if an email address matches `local-part@domain.tld`
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Check password strength.
    ///
    /// Requires at least 8 characters with one uppercase letter, one lowercase
    /// letter, one digit and one of `@$!%*?&`, and nothing outside
    /// `[A-Za-z0-9@$!%*?&]`.
    pub fn is_valid_password(password: &str) -> bool {
        password.len() >= PASSWORD_MIN_LENGTH
            && PASSWORD_CHARSET_REGEX.is_match(password)
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
    }

    /// Check if a field holds any text at all (whitespace counts)
    pub fn is_present(value: &str) -> bool {
        !value.is_empty()
    }
}
