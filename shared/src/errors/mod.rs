//! Shared error types and message keys

use thiserror::Error;

/// Configuration problems detected while loading or validating settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Stable keys identifying every inline message the client can show.
///
/// The presentation layer maps these to localized text.
pub mod error_codes {
    pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
    pub const WEAK_PASSWORD: &str = "WEAK_PASSWORD";
    pub const PASSWORD_MISMATCH: &str = "PASSWORD_MISMATCH";
    pub const API_KEY_REQUIRED: &str = "API_KEY_REQUIRED";
    pub const REQUIRED_FIELD: &str = "REQUIRED_FIELD";
    pub const START_NOT_BEFORE_END: &str = "START_NOT_BEFORE_END";
    pub const END_DATE_IN_FUTURE: &str = "END_DATE_IN_FUTURE";
    pub const ACCOUNT_ALREADY_EXISTS: &str = "ACCOUNT_ALREADY_EXISTS";
    pub const ACCOUNT_NOT_FOUND: &str = "ACCOUNT_NOT_FOUND";
    pub const INVALID_API_KEY: &str = "INVALID_API_KEY";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const VERIFICATION_CODE_EXPIRED: &str = "VERIFICATION_CODE_EXPIRED";
    pub const NO_PENDING_RESET: &str = "NO_PENDING_RESET";
    pub const AREA_EMPTY: &str = "AREA_EMPTY";
    pub const AREA_TOO_SMALL: &str = "AREA_TOO_SMALL";
    pub const INVALID_DATE_RANGE: &str = "INVALID_DATE_RANGE";
    pub const MISSING_API_KEY: &str = "MISSING_API_KEY";
    pub const QUOTA_EXCEEDED: &str = "QUOTA_EXCEEDED";
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
}
