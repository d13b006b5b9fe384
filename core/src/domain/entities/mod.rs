//! Domain entities representing transient, per-screen form state.
//!
//! Nothing here is persisted; every entity lives for as long as the screen
//! (or session) that owns it.

pub mod area_selection;
pub mod credentials;
pub mod password_reset;
pub mod project;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use area_selection::AreaSelection;
pub use credentials::{Credentials, RegistrationForm};
pub use password_reset::{PasswordResetSession, ResetStage};
pub use project::Project;
