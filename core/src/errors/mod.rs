//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, DateRangeError, ImageryError, NavigationError};

use cams_shared::validation::ValidationErrors;
use thiserror::Error;

/// Core domain errors bridging every concern-specific error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed: {errors:?}")]
    Validation { errors: ValidationErrors },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Imagery(#[from] ImageryError),

    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl DomainError {
    /// Stable message key for the inline text this error maps to
    pub fn code(&self) -> &'static str {
        use cams_shared::error_codes;

        match self {
            DomainError::Validation { errors } => errors
                .errors()
                .first()
                .map(|e| code_for_validation(&e.code))
                .unwrap_or(error_codes::REQUIRED_FIELD),
            DomainError::Auth(e) => e.code(),
            DomainError::Imagery(e) => e.code(),
            DomainError::DateRange(e) => e.code(),
            DomainError::Navigation(_) => error_codes::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation { errors }
    }
}

// Validation codes are already stable keys; map them back to 'static
fn code_for_validation(code: &str) -> &'static str {
    use cams_shared::error_codes::*;

    [
        INVALID_EMAIL,
        WEAK_PASSWORD,
        PASSWORD_MISMATCH,
        API_KEY_REQUIRED,
        REQUIRED_FIELD,
        START_NOT_BEFORE_END,
        END_DATE_IN_FUTURE,
    ]
    .into_iter()
    .find(|known| *known == code)
    .unwrap_or(REQUIRED_FIELD)
}

pub type DomainResult<T> = Result<T, DomainError>;
