//! Navigation model: screen identifiers and an explicit stack.

mod screen;
mod stack;

pub use screen::Screen;
pub use stack::{NavigationStack, Routable};
