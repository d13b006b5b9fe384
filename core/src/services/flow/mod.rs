//! Flow controller: the one place where screens, navigation, collaborators
//! and the cooldown timer meet.

mod app_state;
mod controller;
mod settings;

pub use app_state::AppState;
pub use controller::FlowController;
pub use settings::FlowSettings;
