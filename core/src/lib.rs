//! # CAMS Core
//!
//! Flow logic and domain layer for the CAMS field-monitoring client.
//! This crate contains the form entities, validators, the resend cooldown,
//! the navigation stack, the flow controller that ties screens together, and
//! the collaborator traits the flows call through.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
