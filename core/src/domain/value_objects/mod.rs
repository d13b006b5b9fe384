//! Value objects shared by screens and flows.

pub mod advisory;
pub mod cooldown;
pub mod job_handle;
pub mod secure_field;

pub use advisory::Advisory;
pub use cooldown::{CooldownPhase, ResendCooldown, TickOutcome};
pub use job_handle::JobHandle;
pub use secure_field::SecureField;
