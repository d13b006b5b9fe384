//! Common utility functions

pub mod email;
pub mod validation;

// Re-export commonly used utilities
pub use email::*;
pub use validation::validators::{is_present, is_valid_email, is_valid_password};
