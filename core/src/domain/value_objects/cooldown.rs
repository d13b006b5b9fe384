//! Resend cooldown state machine.
//!
//! The cooldown itself never touches a clock: it only reacts to `start` and
//! `tick`. A timer task (see `services::cooldown`) produces ticks tagged with
//! the generation returned by `start`, so ticks from a superseded timer are
//! recognisable and dropped.

use serde::{Deserialize, Serialize};

/// Sub-state of a sent code: waiting out the cooldown or ready to resend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooldownPhase {
    CoolingDown,
    Ready,
}

/// What a tick did to the cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick belonged to an old generation or arrived while ready
    Ignored,
    /// Countdown continues with this many seconds left
    Counting(u32),
    /// Countdown reached zero; resend is allowed again and the timer should stop
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendCooldown {
    duration_seconds: u32,
    seconds_remaining: u32,
    can_resend: bool,
    generation: u64,
}

impl ResendCooldown {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration_seconds,
            seconds_remaining: duration_seconds,
            can_resend: true,
            generation: 0,
        }
    }

    /// Begin (or restart) the countdown and return its generation
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.can_resend = false;
        self.seconds_remaining = self.duration_seconds;
        self.generation
    }

    /// Apply one tick produced for `generation`
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || self.can_resend {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.can_resend = true;
            TickOutcome::Finished
        } else {
            TickOutcome::Counting(self.seconds_remaining)
        }
    }

    /// Invalidate outstanding ticks without touching the visible state
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn can_resend(&self) -> bool {
        self.can_resend
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> CooldownPhase {
        if self.can_resend {
            CooldownPhase::Ready
        } else {
            CooldownPhase::CoolingDown
        }
    }

    /// Label for the send button
    pub fn button_label(&self) -> String {
        if self.can_resend {
            "Send Code".to_string()
        } else {
            format!("Resend Code in {}s", self.seconds_remaining)
        }
    }
}
