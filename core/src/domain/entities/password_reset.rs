//! Password reset session entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ResendCooldown;

/// Where the reset flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetStage {
    /// No code requested yet
    Idle,
    /// A code was sent; the code field is shown
    CodeSent,
    /// A code was submitted and is being checked
    AwaitingVerification,
    /// The code was accepted
    Verified,
}

/// State of one forgot-password screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetSession {
    pub email: String,
    pub verification_code: String,
    pub stage: ResetStage,
    pub cooldown: ResendCooldown,
}

impl PasswordResetSession {
    pub fn new(cooldown_seconds: u32) -> Self {
        Self {
            email: String::new(),
            verification_code: String::new(),
            stage: ResetStage::Idle,
            cooldown: ResendCooldown::new(cooldown_seconds),
        }
    }

    /// Whether a code has been sent at least once in this session
    pub fn code_sent(&self) -> bool {
        self.stage != ResetStage::Idle
    }

    pub fn can_resend_code(&self) -> bool {
        self.cooldown.can_resend()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.cooldown.seconds_remaining()
    }

    /// Record a successful send and restart the cooldown.
    ///
    /// Returns the cooldown generation ticks must carry to be applied.
    pub fn mark_code_sent(&mut self) -> u64 {
        if self.stage == ResetStage::Idle {
            self.stage = ResetStage::CodeSent;
        }
        self.cooldown.start()
    }
}
