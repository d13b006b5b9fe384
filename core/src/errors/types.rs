//! Error types for account, imagery, date and navigation operations
//!
//! Display strings are developer-facing. The text shown next to a field is
//! looked up by `code()` in the presentation layer.

use cams_shared::error_codes;
use thiserror::Error;

use crate::services::navigation::Screen;

/// Account-related errors returned by the account collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password does not meet the strength policy")]
    WeakPassword,

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Verification code expired")]
    VerificationCodeExpired,

    #[error("No password reset in progress")]
    NoPendingReset,

    #[error("Account service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => error_codes::INVALID_EMAIL,
            AuthError::WeakPassword => error_codes::WEAK_PASSWORD,
            AuthError::AccountAlreadyExists => error_codes::ACCOUNT_ALREADY_EXISTS,
            AuthError::AccountNotFound => error_codes::ACCOUNT_NOT_FOUND,
            AuthError::InvalidApiKey => error_codes::INVALID_API_KEY,
            AuthError::InvalidVerificationCode => error_codes::VERIFICATION_CODE_INVALID,
            AuthError::VerificationCodeExpired => error_codes::VERIFICATION_CODE_EXPIRED,
            AuthError::NoPendingReset => error_codes::NO_PENDING_RESET,
            AuthError::ServiceUnavailable { .. } => error_codes::SERVICE_UNAVAILABLE,
        }
    }
}

/// Errors returned by the satellite imagery collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageryError {
    #[error("No area selected")]
    EmptyArea,

    #[error("Area needs more points (got {points})")]
    AreaTooSmall { points: usize },

    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    #[error("Imagery API key missing")]
    MissingApiKey,

    #[error("Imagery quota exceeded")]
    QuotaExceeded,

    #[error("Imagery service unavailable: {message}")]
    ServiceUnavailable { message: String },
}

impl ImageryError {
    pub fn code(&self) -> &'static str {
        match self {
            ImageryError::EmptyArea => error_codes::AREA_EMPTY,
            ImageryError::AreaTooSmall { .. } => error_codes::AREA_TOO_SMALL,
            ImageryError::InvalidDateRange { .. } => error_codes::INVALID_DATE_RANGE,
            ImageryError::MissingApiKey => error_codes::MISSING_API_KEY,
            ImageryError::QuotaExceeded => error_codes::QUOTA_EXCEEDED,
            ImageryError::ServiceUnavailable { .. } => error_codes::SERVICE_UNAVAILABLE,
        }
    }
}

/// Reasons a project date range is rejected, in check order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("start date must be earlier than end date")]
    StartNotBeforeEnd,

    #[error("end date cannot be in the future")]
    EndDateInFuture,
}

impl DateRangeError {
    pub fn code(&self) -> &'static str {
        match self {
            DateRangeError::StartNotBeforeEnd => error_codes::START_NOT_BEFORE_END,
            DateRangeError::EndDateInFuture => error_codes::END_DATE_IN_FUTURE,
        }
    }
}

/// Navigation stack and flow errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Screen {screen} is not on the navigation stack")]
    ScreenNotInStack { screen: Screen },

    #[error("Cannot pop the root screen")]
    CannotPopRoot,

    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition { from: Screen, to: Screen },

    #[error("Expected {expected} on top of the stack, found {actual}")]
    WrongScreen { expected: Screen, actual: Screen },

    #[error("Submit is not available on {screen}")]
    GateClosed { screen: Screen },
}
