//! Flow services: collaborator seams, timers, navigation and screen logic.

pub mod account;
pub mod clock;
pub mod cooldown;
pub mod flow;
pub mod imagery;
pub mod navigation;
pub mod project;
pub mod screens;

// Re-export commonly used types
pub use account::AccountServiceTrait;
pub use clock::{Clock, FixedClock, SystemClock};
pub use cooldown::{CooldownTick, CooldownTimer};
pub use flow::{AppState, FlowController, FlowSettings};
pub use imagery::ImageryServiceTrait;
pub use navigation::{NavigationStack, Routable, Screen};
pub use project::{validate_project_dates, validate_project_dates_in};
pub use screens::ScreenState;
