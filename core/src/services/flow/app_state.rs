//! Process-lifetime application state

use crate::services::navigation::Screen;

/// State shared by every screen for the life of the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppState {
    is_logged_out: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_out(&self) -> bool {
        self.is_logged_out
    }

    /// Set after a successful password change
    pub fn mark_logged_out(&mut self) {
        self.is_logged_out = true;
    }

    /// Entry screen shown at the root of the stack.
    ///
    /// Both branches lead to Login; the logged-out flag does not currently
    /// change the entry screen.
    #[allow(clippy::if_same_then_else)]
    pub fn root_screen(&self) -> Screen {
        if self.is_logged_out {
            Screen::Login
        } else {
            Screen::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_login_either_way() {
        let mut state = AppState::new();
        assert!(!state.is_logged_out());
        assert_eq!(state.root_screen(), Screen::Login);

        state.mark_logged_out();
        assert!(state.is_logged_out());
        assert_eq!(state.root_screen(), Screen::Login);
    }
}
