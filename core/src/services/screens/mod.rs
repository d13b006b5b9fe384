//! Per-screen form state.
//!
//! Every screen owns its fields, recomputes its inline advisories when a
//! field changes, and exposes a `can_*` gate derived from the validators.
//! Screens never talk to collaborators; the flow controller does that and
//! reports failures back through `set_submit_error`.

mod add_project;
mod change_password;
mod forgot_password;
mod login;
mod map_selection;
mod project_list;
mod register;

pub use add_project::AddProjectScreen;
pub use change_password::ChangePasswordScreen;
pub use forgot_password::ForgotPasswordScreen;
pub use login::LoginScreen;
pub use map_selection::MapSelectionScreen;
pub use project_list::ProjectListScreen;
pub use register::RegisterScreen;

use super::navigation::{Routable, Screen};

/// Advisories only show for fields the user has typed into
pub(crate) fn should_show(value: &str, valid: bool) -> bool {
    !valid && !value.is_empty()
}

/// Mismatch shows once the confirmation has content and differs
pub(crate) fn should_show_mismatch(password: &str, confirmation: &str) -> bool {
    password != confirmation && !confirmation.is_empty()
}

/// A live screen on the navigation stack together with its state
#[derive(Debug)]
pub enum ScreenState {
    Login(LoginScreen),
    Register(RegisterScreen),
    ForgotPassword(ForgotPasswordScreen),
    ChangePassword(ChangePasswordScreen),
    ProjectList(ProjectListScreen),
    AddProject(AddProjectScreen),
    MapSelection(MapSelectionScreen),
}

impl Routable for ScreenState {
    fn screen(&self) -> Screen {
        match self {
            ScreenState::Login(_) => Screen::Login,
            ScreenState::Register(_) => Screen::Register,
            ScreenState::ForgotPassword(_) => Screen::ForgotPassword,
            ScreenState::ChangePassword(_) => Screen::ChangePassword,
            ScreenState::ProjectList(_) => Screen::ProjectList,
            ScreenState::AddProject(_) => Screen::AddProject,
            ScreenState::MapSelection(_) => Screen::MapSelection,
        }
    }
}
