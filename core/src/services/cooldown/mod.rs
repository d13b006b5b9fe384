//! Resend cooldown timer.
//!
//! The cooldown state lives on the owning screen (`ResendCooldown`); this
//! module only produces the one-second ticks. Ticks are delivered over a
//! channel so they are applied on the same task that handles user input.

mod timer;

pub use timer::{CooldownTick, CooldownTimer};
