//! Login screen

use cams_shared::validation::{validators, Validate};

use crate::domain::entities::Credentials;
use crate::domain::value_objects::{Advisory, SecureField};

use super::should_show;

#[derive(Debug, Default)]
pub struct LoginScreen {
    email: String,
    password: SecureField,
    show_email_error: bool,
    show_password_error: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecureField {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.show_email_error = should_show(&self.email, validators::is_valid_email(&self.email));
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password.set(password);
        let value = self.password.value();
        self.show_password_error = should_show(value, validators::is_valid_password(value));
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password.toggle_visibility();
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.value())
    }

    /// Login is enabled only when both email and password pass
    pub fn can_submit(&self) -> bool {
        self.credentials().validate().is_ok()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.show_email_error {
            advisories.push(Advisory::InvalidEmail);
        }
        if self.show_password_error {
            advisories.push(Advisory::WeakPassword);
        }
        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_both_fields() {
        let mut screen = LoginScreen::new();
        assert!(!screen.can_submit());
        assert!(screen.advisories().is_empty());

        screen.set_email("grower@farm.io");
        assert!(!screen.can_submit());

        screen.set_password("Abcdef1!");
        assert!(screen.can_submit());

        screen.set_email("grower@farm");
        assert!(!screen.can_submit());
    }

    #[test]
    fn test_advisories_follow_edits() {
        let mut screen = LoginScreen::new();
        screen.set_email("grower");
        screen.set_password("weak");
        assert_eq!(
            screen.advisories(),
            vec![Advisory::InvalidEmail, Advisory::WeakPassword]
        );

        screen.set_email("");
        screen.set_password("");
        assert!(screen.advisories().is_empty());
        assert!(!screen.can_submit());
    }

    #[test]
    fn test_visibility_toggle_does_not_affect_gate() {
        let mut screen = LoginScreen::new();
        screen.set_email("grower@farm.io");
        screen.set_password("Abcdef1!");
        screen.toggle_password_visibility();
        assert!(!screen.password().is_secured());
        assert!(screen.can_submit());
    }
}
