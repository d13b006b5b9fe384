//! Account collaborator: registration and password reset.

mod traits;

pub use traits::AccountServiceTrait;
