//! Screen identifiers and the allowed forward transitions between them

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Register,
    ForgotPassword,
    ChangePassword,
    ProjectList,
    AddProject,
    MapSelection,
}

impl Screen {
    /// Screens reachable by a push from this one
    pub fn destinations(&self) -> &'static [Screen] {
        match self {
            Screen::Login => &[Screen::Register, Screen::ForgotPassword, Screen::ProjectList],
            Screen::ForgotPassword => &[Screen::ChangePassword],
            Screen::ProjectList => &[Screen::AddProject],
            Screen::AddProject => &[Screen::MapSelection],
            Screen::Register | Screen::ChangePassword | Screen::MapSelection => &[],
        }
    }

    pub fn can_push(&self, to: Screen) -> bool {
        self.destinations().contains(&to)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "CAMS Login",
            Screen::Register => "Create Account",
            Screen::ForgotPassword => "Reset Password",
            Screen::ChangePassword => "Change Password",
            Screen::ProjectList => "Your Projects",
            Screen::AddProject => "New Project",
            Screen::MapSelection => "Select Area",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::ForgotPassword => "ForgotPassword",
            Screen::ChangePassword => "ChangePassword",
            Screen::ProjectList => "ProjectList",
            Screen::AddProject => "AddProject",
            Screen::MapSelection => "MapSelection",
        };
        write!(f, "{}", name)
    }
}
