//! Forgot-password screen: request a reset code, then submit it.
//!
//! The screen owns its [`CooldownTimer`], so leaving the screen (dropping
//! its stack entry) stops any outstanding ticks.

use std::time::Duration;

use cams_shared::validation::validators;
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::entities::{PasswordResetSession, ResetStage};
use crate::domain::value_objects::{Advisory, CooldownPhase, TickOutcome};
use crate::errors::AuthError;
use crate::services::cooldown::{CooldownTick, CooldownTimer};

use super::should_show;

#[derive(Debug)]
pub struct ForgotPasswordScreen {
    session: PasswordResetSession,
    show_email_error: bool,
    submit_error: Option<AuthError>,
    timer: CooldownTimer,
}

impl ForgotPasswordScreen {
    pub fn new(cooldown_seconds: u32) -> Self {
        Self {
            session: PasswordResetSession::new(cooldown_seconds),
            show_email_error: false,
            submit_error: None,
            timer: CooldownTimer::new(),
        }
    }

    pub fn session(&self) -> &PasswordResetSession {
        &self.session
    }

    pub fn email(&self) -> &str {
        &self.session.email
    }

    pub fn verification_code(&self) -> &str {
        &self.session.verification_code
    }

    pub fn stage(&self) -> ResetStage {
        self.session.stage
    }

    pub fn submit_error(&self) -> Option<&AuthError> {
        self.submit_error.as_ref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.session.email = email.into();
        self.show_email_error = should_show(
            &self.session.email,
            validators::is_valid_email(&self.session.email),
        );
        self.submit_error = None;
    }

    pub fn set_verification_code(&mut self, code: impl Into<String>) {
        self.session.verification_code = code.into();
        self.submit_error = None;
    }

    pub fn set_submit_error(&mut self, error: AuthError) {
        self.submit_error = Some(error);
    }

    /// Send/Resend is enabled when the cooldown is ready and the email is valid
    pub fn can_send_code(&self) -> bool {
        self.session.can_resend_code() && validators::is_valid_email(&self.session.email)
    }

    /// The code field and its submit only exist once a code was sent
    pub fn can_submit_code(&self) -> bool {
        self.session.code_sent() && !self.session.verification_code.is_empty()
    }

    pub fn cooldown_phase(&self) -> CooldownPhase {
        self.session.cooldown.phase()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.session.seconds_remaining()
    }

    pub fn button_label(&self) -> String {
        self.session.cooldown.button_label()
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Record a delivered code and (re)start the cooldown.
    ///
    /// Any previous tick task is aborted before the new one starts, and its
    /// late ticks carry a stale generation.
    pub fn begin_cooldown(&mut self, period: Duration, sender: UnboundedSender<CooldownTick>) {
        let generation = self.session.mark_code_sent();
        let ticks = self.session.cooldown.duration_seconds();
        self.timer.start(generation, ticks, period, sender);
    }

    pub fn apply_tick(&mut self, tick: CooldownTick) -> TickOutcome {
        let outcome = self.session.cooldown.tick(tick.generation);
        if outcome == TickOutcome::Finished {
            self.timer.cancel();
        }
        outcome
    }

    pub fn mark_awaiting_verification(&mut self) {
        self.session.stage = ResetStage::AwaitingVerification;
    }

    pub fn mark_verified(&mut self) {
        self.session.stage = ResetStage::Verified;
    }

    /// Verification failed; the code can be edited and submitted again
    pub fn mark_verification_failed(&mut self, error: AuthError) {
        self.session.stage = ResetStage::CodeSent;
        self.submit_error = Some(error);
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        if self.show_email_error {
            vec![Advisory::InvalidEmail]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_send_gate() {
        let mut screen = ForgotPasswordScreen::new(30);
        assert!(!screen.can_send_code());
        assert_eq!(screen.button_label(), "Send Code");

        screen.set_email("grower@farm");
        assert!(!screen.can_send_code());
        assert_eq!(screen.advisories(), vec![Advisory::InvalidEmail]);

        screen.set_email("grower@farm.io");
        assert!(screen.can_send_code());
        assert!(screen.advisories().is_empty());
    }

    #[test]
    fn test_code_gate_requires_sent_code() {
        let mut screen = ForgotPasswordScreen::new(30);
        screen.set_verification_code("123456");
        assert!(!screen.can_submit_code());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_cycle() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = ForgotPasswordScreen::new(30);
        screen.set_email("grower@farm.io");

        screen.begin_cooldown(Duration::from_secs(1), tx);
        assert_eq!(screen.stage(), ResetStage::CodeSent);
        assert!(!screen.can_send_code());
        assert_eq!(screen.seconds_remaining(), 30);
        assert_eq!(screen.button_label(), "Resend Code in 30s");

        screen.set_verification_code("123456");
        assert!(screen.can_submit_code());

        let mut last = TickOutcome::Ignored;
        for _ in 0..30 {
            let tick = rx.recv().await.unwrap();
            last = screen.apply_tick(tick);
        }
        assert_eq!(last, TickOutcome::Finished);
        assert!(screen.can_send_code());
        assert_eq!(screen.cooldown_phase(), CooldownPhase::Ready);
        assert!(!screen.is_timer_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_mid_cooldown_ignores_old_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = ForgotPasswordScreen::new(30);
        screen.set_email("grower@farm.io");

        screen.begin_cooldown(Duration::from_secs(1), tx.clone());
        for _ in 0..10 {
            let tick = rx.recv().await.unwrap();
            screen.apply_tick(tick);
        }
        assert_eq!(screen.seconds_remaining(), 20);

        // A late tick from the first run must not count after a restart
        let stale = CooldownTick {
            generation: screen.session().cooldown.generation(),
        };
        screen.begin_cooldown(Duration::from_secs(1), tx);
        assert_eq!(screen.apply_tick(stale), TickOutcome::Ignored);
        assert_eq!(screen.seconds_remaining(), 30);
    }

    #[test]
    fn test_failed_verification_returns_to_code_sent() {
        let mut screen = ForgotPasswordScreen::new(30);
        screen.session.stage = ResetStage::CodeSent;
        screen.mark_awaiting_verification();
        screen.mark_verification_failed(AuthError::InvalidVerificationCode);
        assert_eq!(screen.stage(), ResetStage::CodeSent);
        assert_eq!(
            screen.submit_error(),
            Some(&AuthError::InvalidVerificationCode)
        );
    }
}
