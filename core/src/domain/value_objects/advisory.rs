//! Field-level advisory shown inline beneath an input.

use cams_shared::error_codes;

use crate::errors::DateRangeError;

/// A non-fatal validation hint attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    InvalidEmail,
    WeakPassword,
    PasswordMismatch,
    DateRange(DateRangeError),
}

impl Advisory {
    /// Message key used to look up the inline text
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::InvalidEmail => error_codes::INVALID_EMAIL,
            Advisory::WeakPassword => error_codes::WEAK_PASSWORD,
            Advisory::PasswordMismatch => error_codes::PASSWORD_MISMATCH,
            Advisory::DateRange(e) => e.code(),
        }
    }

    /// Field the advisory is rendered under
    pub fn field(&self) -> &'static str {
        match self {
            Advisory::InvalidEmail => "email",
            Advisory::WeakPassword => "password",
            Advisory::PasswordMismatch => "confirm_password",
            Advisory::DateRange(_) => "dates",
        }
    }
}
