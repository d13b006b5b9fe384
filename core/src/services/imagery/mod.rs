//! Satellite imagery collaborator.

mod traits;

pub use traits::ImageryServiceTrait;
