//! Unit tests for the password reset session

use crate::domain::entities::password_reset::{PasswordResetSession, ResetStage};
use crate::domain::value_objects::CooldownPhase;

#[test]
fn test_new_session() {
    let session = PasswordResetSession::new(30);
    assert_eq!(session.stage, ResetStage::Idle);
    assert!(!session.code_sent());
    assert!(session.can_resend_code());
    assert_eq!(session.seconds_remaining(), 30);
}

#[test]
fn test_mark_code_sent_starts_cooldown() {
    let mut session = PasswordResetSession::new(30);
    let generation = session.mark_code_sent();

    assert!(session.code_sent());
    assert_eq!(session.stage, ResetStage::CodeSent);
    assert!(!session.can_resend_code());
    assert_eq!(session.cooldown.phase(), CooldownPhase::CoolingDown);
    assert_eq!(session.cooldown.generation(), generation);
}

#[test]
fn test_resend_keeps_stage() {
    let mut session = PasswordResetSession::new(30);
    let first = session.mark_code_sent();
    session.stage = ResetStage::AwaitingVerification;
    let second = session.mark_code_sent();

    assert!(second > first);
    assert_eq!(session.stage, ResetStage::AwaitingVerification);
}
